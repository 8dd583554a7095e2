//! Time-based one-time passwords, HMAC-SHA1 flavour.
//!
//! The counter is the number of whole periods since the UNIX epoch,
//! fed big-endian into the HMAC, then dynamically truncated as in RFC 4226.

use core::fmt;

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::Result;

type HmacSha1 = Hmac<Sha1>;

/// Seconds after which the counter for the TOTP token is incremented
pub const PERIOD_SECONDS: u64 = 30;
/// Length of a displayed code
pub const DIGITS: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Contains a one-time password
pub struct Otp(pub u32);

/// OTP codes are typically presented as left-zero-padded strings
impl fmt::Display for Otp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = DIGITS as usize)
    }
}

/// RFC 4648 base32 that ignores leftover bits in the last character,
/// as most authenticator apps do.
fn lenient_base32() -> data_encoding::Encoding {
    let mut spec = data_encoding::BASE32.specification();
    spec.check_trailing_bits = false;
    // only relaxes a flag on a known-good specification
    spec.encoding().unwrap_or_else(|_| data_encoding::BASE32.clone())
}

/// Decodes a base32 secret the way authenticator apps accept them:
/// surrounding whitespace and lowercase letters are tolerated,
/// missing `=` padding is filled in, and non-zero trailing bits are dropped.
pub fn decode_secret(base32_secret: &str) -> Result<Vec<u8>> {
    let mut normalized = base32_secret.trim().to_ascii_uppercase();
    let missing = (8 - normalized.len() % 8) % 8;
    normalized.extend(core::iter::repeat('=').take(missing));

    Ok(lenient_base32().decode(normalized.as_bytes())?)
}

/// Computes the code for `base32_secret` in the window containing `unix_seconds`.
pub fn generate(base32_secret: &str, unix_seconds: u64) -> Result<Otp> {
    let key = decode_secret(base32_secret)?;
    let counter = unix_seconds / PERIOD_SECONDS;

    let mut mac = HmacSha1::new_from_slice(&key)?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // low nibble of the last byte selects where the 31-bit excerpt starts
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = (u32::from(digest[offset] & 0x7f) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);

    Ok(Otp(binary % 10u32.pow(DIGITS)))
}

/// Seconds left until the next period boundary, in `1..=PERIOD_SECONDS`.
pub fn remaining(unix_seconds: u64) -> u64 {
    PERIOD_SECONDS - unix_seconds % PERIOD_SECONDS
}
