use core::convert::TryFrom;

use anyhow::{Context as _, Result};
use log::{info, LevelFilter};

use totp_dashboard::{
    cli,
    config,
    refresh,
};

fn main() -> Result<()> {

    let args = init_app();
    let options = cli::Options::try_from(&args)?;

    init_logger(options.log_level())?;
    info!("starting with {:?}", &options);

    let config = config::load(&options.config_path)
        .and_then(config::Config::validate)
        .context("Error loading config")?;
    info!("showing {} accounts", config.accounts.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    refresh::run(&mut out, &config.accounts)?;

    Ok(())
}

pub fn init_app() -> clap::ArgMatches<'static> {
    let app = cli::app();
    let matches = app.get_matches();
    matches
}

pub fn init_logger(level: LevelFilter) -> Result<()> {
    simple_logger::SimpleLogger::new().with_level(level).init()?;
    Ok(())
}
