//! Paired monotonic and wall-clock timestamps
//!
//! The monotonic half drives interval decisions and is immune to wall-clock
//! adjustment; the wall half is only used for display.

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Display pattern for every timestamp the logger writes
const WALL_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A monotonic instant and a local wall-clock instant sampled together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSync {
    monotonic: Instant,
    wall: DateTime<Local>,
}

impl ClockSync {
    /// Sample both clocks, monotonic first
    pub fn capture() -> Self {
        let monotonic = Instant::now();
        let wall = Local::now();
        Self { monotonic, wall }
    }

    pub fn wall(&self) -> DateTime<Local> {
        self.wall
    }

    /// Format a wall-clock instant as `YYYY-MM-DD HH:MM:SS.mmm`
    pub fn format_wall_clock(instant: &DateTime<Local>) -> String {
        instant.format(WALL_CLOCK_FORMAT).to_string()
    }

    /// This snapshot's wall clock, formatted
    pub fn timestamp(&self) -> String {
        Self::format_wall_clock(&self.wall)
    }

    /// Monotonic time elapsed since `earlier`, zero if `earlier` is later
    pub fn elapsed_since(&self, earlier: &ClockSync) -> Duration {
        self.monotonic.saturating_duration_since(earlier.monotonic)
    }

    /// A snapshot `offset` later than this one on both clocks.
    /// Either clock stays put if shifting it would overflow.
    pub fn advanced_by(&self, offset: Duration) -> Self {
        let monotonic = self.monotonic.checked_add(offset).unwrap_or(self.monotonic);
        let wall = chrono::Duration::from_std(offset)
            .ok()
            .and_then(|delta| self.wall.checked_add_signed(delta))
            .unwrap_or(self.wall);
        Self { monotonic, wall }
    }
}
