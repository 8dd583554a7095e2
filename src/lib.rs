//! # TOTP dashboard
//!
//! A terminal dashboard that shows the current time-based one-time password
//! ([RFC 6238][rfc6238]) for every account listed in a YAML config file, and
//! redraws itself once per second with a countdown to the next rotation.
//!
//! The pieces, in the order the binary wires them together:
//! - [`cli`] turns the command line into [`cli::Options`]
//! - [`config`] loads and validates the account list
//! - [`totp`] computes codes and the countdown from a unix timestamp
//! - [`dashboard`] draws one frame of the table into any `std::io::Write`
//! - [`refresh`] drives the dashboard on a fixed one-second tick
//!
//! Codes are never stored: every frame recomputes them from the wall clock,
//! and the account list is passed explicitly into each frame.
//!
//! [rfc6238]: https://tools.ietf.org/html/rfc6238

mod error;
pub use error::{Error, Result};

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod refresh;
pub mod totp;
