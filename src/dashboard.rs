//! Draws one frame of the dashboard: a bordered table with one row per account.
//!
//! Rendering goes to any `std::io::Write`, so a frame can be captured in a
//! `Vec<u8>` as easily as written to the terminal. Given the same accounts and
//! the same `now`, the output is byte-for-byte identical.

use core::convert::TryFrom;
use core::fmt;
use std::io::Write;

use chrono::{DateTime, TimeZone};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
};
use log::debug;

use crate::config::Account;
use crate::totp;

/// Shown instead of a code when the secret can't be used
pub const ERROR_PLACEHOLDER: &str = "ERROR";
/// Added to the widest value of every measured column
pub const PADDING: usize = 2;

const ID_MIN: usize = 4;
const NAME_MIN: usize = 6;
const USERNAME_MIN: usize = 10;
const SITE_MIN: usize = 6;
const CODE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 8;

const BORDER: Color = Color::DarkGrey;
const HEADER: Color = Color::Green;
const CELL: Color = Color::White;
const CODE: Color = Color::Grey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Column widths for one frame, padding included
pub struct Layout {
    pub id: usize,
    pub name: usize,
    pub username: usize,
    pub site: usize,
    pub code: usize,
    pub time: usize,
}

impl Layout {
    pub fn measure(accounts: &[Account]) -> Self {
        let widest = |min: usize, len: fn(&Account) -> usize| {
            accounts.iter().map(len).fold(min, usize::max) + PADDING
        };

        Layout {
            // the id column keeps an extra padding's worth of room around the number
            id: widest(ID_MIN, |account: &Account| account.id.to_string().len() + PADDING),
            name: widest(NAME_MIN, |account: &Account| account.name.chars().count()),
            username: widest(USERNAME_MIN, |account: &Account| account.username.chars().count()),
            site: widest(SITE_MIN, |account: &Account| account.site.chars().count()),
            code: CODE_WIDTH,
            time: TIME_WIDTH,
        }
    }

    /// Width of a full row, which is also the length of the horizontal borders
    pub fn total_width(&self) -> usize {
        // "║ ", five "│ " separators and " ║"
        self.id + self.name + self.username + self.site + self.code + self.time + 14
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How close the current code is to rotating
pub enum Urgency {
    /// 5 seconds or less
    Critical,
    /// 6 to 10 seconds
    Warning,
    Normal,
}

impl Urgency {
    pub fn from_remaining(seconds: u64) -> Self {
        match seconds {
            0..=5 => Urgency::Critical,
            6..=10 => Urgency::Warning,
            _ => Urgency::Normal,
        }
    }

    fn paint(self, text: String) -> impl fmt::Display {
        match self {
            Urgency::Critical => text.with(Color::Red).bold(),
            Urgency::Warning => text.with(Color::Yellow).bold(),
            Urgency::Normal => text.with(Color::Magenta),
        }
    }
}

/// Splits a six digit code into two groups of three, leaves anything else alone.
pub fn format_code(code: &str) -> String {
    if code.len() == 6 && code.is_ascii() {
        format!("{} {}", &code[..3], &code[3..])
    } else {
        code.to_string()
    }
}

/// The code to display for `account`, or the placeholder if its secret is unusable.
pub fn code_for(account: &Account, unix_seconds: u64) -> String {
    match totp::generate(&account.secret, unix_seconds) {
        Ok(otp) => otp.to_string(),
        Err(err) => {
            debug!("account {}: {}", account.id, err);
            ERROR_PLACEHOLDER.to_string()
        }
    }
}

fn pad(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

/// Clears the screen and draws the table for `accounts` as of `now`.
pub fn render<W, Tz>(out: &mut W, accounts: &[Account], now: &DateTime<Tz>) -> std::io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let unix_seconds = u64::try_from(now.timestamp()).unwrap_or_default();
    let remaining = totp::remaining(unix_seconds);
    let layout = Layout::measure(accounts);
    let border = "═".repeat(layout.total_width());

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", border.as_str().with(BORDER))?;
    write_header(out, &layout)?;
    writeln!(out, "{}", border.as_str().with(BORDER))?;
    for account in accounts {
        write_row(out, &layout, account, unix_seconds, remaining)?;
    }
    writeln!(out, "{}", border.as_str().with(BORDER))?;

    writeln!(out)?;
    let clock = format!("⟳ Auto-refresh | Current time: {}", now.format("%H:%M:%S"));
    writeln!(out, "{}", clock.with(Color::Cyan))?;
    writeln!(out, "{}", "Press Ctrl+C to exit".with(Color::DarkGrey))?;

    Ok(())
}

fn write_header<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let left = "║ ".with(BORDER);
    let sep = "│ ".with(BORDER);
    let right = " ║".with(BORDER);

    writeln!(
        out,
        "{}{}{}{}{}{}{}{}{}{}{}{}{}",
        left,
        pad("ID", layout.id).with(HEADER),
        sep,
        pad("Name", layout.name).with(HEADER),
        sep,
        pad("Username", layout.username).with(HEADER),
        sep,
        pad("Site", layout.site).with(HEADER),
        sep,
        pad(" Code", layout.code).with(HEADER),
        sep,
        pad(" Time", layout.time).with(HEADER),
        right,
    )
}

fn write_row<W: Write>(
    out: &mut W,
    layout: &Layout,
    account: &Account,
    unix_seconds: u64,
    remaining: u64,
) -> std::io::Result<()> {
    let left = "║ ".with(BORDER);
    let sep = "│ ".with(BORDER);
    let right = " ║".with(BORDER);

    let code = format_code(&code_for(account, unix_seconds));
    let time = format!("{}s", remaining);

    writeln!(
        out,
        "{}{}{}{}{}{}{}{}{}{}{}{}{}",
        left,
        pad(&account.id.to_string(), layout.id).with(CELL),
        sep,
        pad(&account.name, layout.name).with(CELL),
        sep,
        pad(&account.username, layout.username).with(CELL),
        sep,
        pad(&account.site, layout.site).with(CELL),
        sep,
        pad(&format!(" {}", code), layout.code).with(CODE).bold(),
        sep,
        Urgency::from_remaining(remaining).paint(pad(&format!(" {}", time), layout.time)),
        right,
    )
}
