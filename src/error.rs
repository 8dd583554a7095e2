use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
/// Everything that can go wrong between reading the config and drawing a frame.
pub enum Error {
    /// The config file could not be read (missing, permissions, ...)
    #[error("could not read config file {}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not YAML, or does not map onto `Config`
    #[error("could not parse config")]
    Parse(#[from] serde_yaml::Error),
    #[error("no accounts found in config file")]
    EmptyConfig,
    /// Recovered per row by the dashboard, never fatal
    #[error("secret is not valid base32")]
    InvalidSecret(#[from] data_encoding::DecodeError),
    /// HMAC takes keys of any length, so this does not happen in practice;
    /// it only carries the error type of `Mac::new_from_slice`
    #[error("secret cannot be used as an HMAC key")]
    KeyLength(#[from] hmac::digest::InvalidLength),
    #[error("terminal output failed")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
