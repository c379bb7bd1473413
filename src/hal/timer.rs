//! Timer Abstractions
//!
//! Provides the control-loop tick clock and the monotonic millisecond
//! counter the interlock is evaluated against.

use embassy_time::{Duration, Instant, Timer};

/// Current monotonic time in milliseconds, wrapping at u32
///
/// The interlock's block window uses wrapping arithmetic, so the
/// truncation to u32 is part of the contract, not a loss.
#[must_use]
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Periodic clock driving the control loop
#[derive(Clone, Copy, Debug)]
pub struct ControlClock {
    /// Period between ticks in milliseconds
    period_ms: u32,
    /// Last tick time
    last_tick: Option<Instant>,
}

impl ControlClock {
    /// Create a control clock with the given tick period
    #[must_use]
    pub const fn from_period_ms(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_tick: None,
        }
    }

    /// Get the tick rate in Hz
    #[must_use]
    pub const fn rate_hz(&self) -> u32 {
        1_000 / self.period_ms
    }

    /// Get period duration
    #[must_use]
    pub const fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms as u64)
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) {
        Timer::after(self.period()).await;
        self.last_tick = Some(Instant::now());
    }

    /// Reset the clock
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

impl defmt::Format for ControlClock {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ControlClock({}ms)", self.period_ms);
    }
}
