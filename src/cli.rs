use core::convert::TryFrom;
use std::path::PathBuf;

use anyhow::{Error, Result};
use clap::{
    App,
    Arg,
    crate_authors, crate_version,
};
use log::LevelFilter;

const ABOUT: &str = "
Shows the current TOTP code of every account in a YAML config file,
refreshed once per second, with a countdown to the next rotation.
";

/// Used when no config path is given on the command line
pub const DEFAULT_CONFIG: &str = "config.yml";

pub fn app() -> clap::App<'static, 'static> {

    let app = App::new("totp-dashboard")
        .author(crate_authors!())
        .version(crate_version!())
        .about(ABOUT)

        .arg(Arg::with_name("CONFIG")
             .help("YAML file listing the accounts to display")
             .value_name("CONFIG")
             .default_value(DEFAULT_CONFIG)
             .required(false)
             .index(1)
        )

        .arg(Arg::with_name("verbose")
             .short("v")
             .long("verbose")
             .multiple(true)
             .help("raise the log level, may be repeated (-v info, -vv debug, -vvv trace)")
        )
    ;

    app

}

#[derive(Clone, Debug, PartialEq)]
/// What the binary was asked to do
pub struct Options {
    pub config_path: PathBuf,
    /// Number of `-v` flags
    pub verbosity: u64,
}

impl Options {
    /// Warnings only by default, so log lines don't tear through the dashboard
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl TryFrom<&'_ clap::ArgMatches<'static>> for Options {
    type Error = Error;
    fn try_from(args: &clap::ArgMatches<'static>) -> Result<Self> {
        let config_path = args.value_of("CONFIG")
            .ok_or_else(|| anyhow::anyhow!("no config path given"))?;

        Ok(Options {
            config_path: config_path.into(),
            verbosity: args.occurrences_of("verbose"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Options {
        let matches = app().get_matches_from_safe(argv.iter().copied()).unwrap();
        Options::try_from(&matches).unwrap()
    }

    #[test]
    fn defaults_to_config_yml() {
        let options = parse(&["totp-dashboard"]);
        assert_eq!(options.config_path, PathBuf::from("config.yml"));
        assert_eq!(options.verbosity, 0);
        assert_eq!(options.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn positional_path_overrides_default() {
        let options = parse(&["totp-dashboard", "/etc/totp/accounts.yml"]);
        assert_eq!(options.config_path, PathBuf::from("/etc/totp/accounts.yml"));
    }

    #[test]
    fn verbosity_counts_flags() {
        assert_eq!(parse(&["totp-dashboard", "-v"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["totp-dashboard", "-vv", "x.yml"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["totp-dashboard", "-v", "--verbose", "-v"]).log_level(), LevelFilter::Trace);
    }

    #[test]
    fn extra_positionals_are_rejected() {
        assert!(app().get_matches_from_safe(vec!["totp-dashboard", "a.yml", "b.yml"]).is_err());
    }
}
