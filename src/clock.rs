//! Clock capability for the one time-derived value on the page.
//!
//! The footer's copyright line carries the current calendar year. Reading the
//! wall clock directly inside a component would make the renderer untestable,
//! so the year comes in through this trait instead.

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock {
    /// The year to print in the copyright line.
    fn year(&self) -> i32;
}

/// Reads the local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A frozen clock for tests and reproducible snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn year(&self) -> i32 {
        self.0
    }
}
