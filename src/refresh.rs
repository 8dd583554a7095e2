//! The refresh loop: one frame right away, then one per tick, forever.

use std::io::Write;
use std::thread::sleep;
use std::time::{Duration, Instant};

use chrono::Local;
use log::trace;

use crate::config::Account;
use crate::dashboard;
use crate::Result;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Fixed-cadence ticks on a single thread.
///
/// Deadlines are spaced `interval` apart from the moment the ticker is created.
/// When the caller overruns a deadline, the next tick fires immediately and the
/// schedule restarts from there; missed ticks are not replayed.
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next: Instant::now() + interval }
    }

    /// Blocks until the next tick.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            sleep(self.next - now);
            self.next += self.interval;
        } else {
            self.next = now + self.interval;
        }
    }
}

/// Redraws the dashboard on `out` every second. Only returns on a write error.
pub fn run<W: Write>(out: &mut W, accounts: &[Account]) -> Result<()> {
    drive(out, accounts, Ticker::new(REFRESH_INTERVAL), None)
}

fn drive<W: Write>(
    out: &mut W,
    accounts: &[Account],
    mut ticker: Ticker,
    frame_limit: Option<u64>,
) -> Result<()> {
    let mut frames: u64 = 0;
    loop {
        dashboard::render(out, accounts, &Local::now())?;
        out.flush()?;
        frames += 1;
        trace!("rendered frame {}", frames);

        if frame_limit == Some(frames) {
            return Ok(());
        }
        ticker.wait();
    }
}
