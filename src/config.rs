//! The account list, as read from a YAML file.
//!
//! ```yaml
//! accounts:
//!   - id: 1
//!     name: GitHub
//!     username: alice
//!     site: github.com
//!     secret: JBSWY3DPEHPK3PXP
//! ```
//!
//! Every field is optional and falls back to its zero value; unknown keys are ignored.

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::{Error, Result};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
/// One row of the dashboard
pub struct Account {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub site: String,
    /// Base32-encoded TOTP seed
    pub secret: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub accounts: Vec<Account>,
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// A dashboard without accounts is refused before anything is drawn.
    pub fn validate(self) -> Result<Self> {
        if self.accounts.is_empty() {
            return Err(Error::EmptyConfig);
        }
        Ok(self)
    }
}

/// Reads and parses the config file at `path`. Does not validate.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    info!("loading config from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    let config = Config::from_yaml(&content)?;
    debug!("found {} accounts", config.accounts.len());
    Ok(config)
}
