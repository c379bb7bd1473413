//! Post-change TX Block Window
//!
//! Tracks the time of the last band change and forbids transmission until
//! the configured settle duration has elapsed, so relays are never hot
//! switched. The window is a passive value: it is armed on a band change
//! and queried against the caller's clock, it never ticks on its own.

use crate::types::BlockSeconds;

/// TX block window over a wrapping millisecond clock
///
/// Arithmetic uses wrapping subtraction, so the window stays correct
/// across u32 clock rollover as long as the configured duration is far
/// smaller than the wrap period (the maximum, 600 s, is).
#[derive(Clone, Copy, Debug)]
pub struct BlockWindow {
    /// Time of the last band change; None until the first change
    changed_at: Option<u32>,
    /// Configured settle duration in milliseconds
    duration_ms: u32,
}

impl BlockWindow {
    /// Create an unarmed window with the given duration
    #[must_use]
    pub const fn new(duration: BlockSeconds) -> Self {
        Self {
            changed_at: None,
            duration_ms: duration.as_millis(),
        }
    }

    /// Update the settle duration (configuration push)
    ///
    /// Takes effect immediately, including for a window already armed.
    pub fn set_duration(&mut self, duration: BlockSeconds) {
        self.duration_ms = duration.as_millis();
    }

    /// Get the configured duration in milliseconds
    #[must_use]
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Arm the window: record a band change at `now_ms`
    pub fn arm(&mut self, now_ms: u32) {
        self.changed_at = Some(now_ms);
    }

    /// Check whether transmission is currently forbidden
    ///
    /// Active iff `now - changed_at <= duration` (wrapping). An unarmed
    /// window is never active.
    #[must_use]
    pub fn is_active(&self, now_ms: u32) -> bool {
        match self.changed_at {
            None => false,
            Some(changed_at) => now_ms.wrapping_sub(changed_at) <= self.duration_ms,
        }
    }

    /// Milliseconds until the window expires (0 when inactive)
    #[must_use]
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        match self.changed_at {
            None => 0,
            Some(changed_at) => {
                let elapsed = now_ms.wrapping_sub(changed_at);
                if elapsed <= self.duration_ms {
                    self.duration_ms - elapsed
                } else {
                    0
                }
            }
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BlockWindow {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "BlockWindow({}ms)", self.duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_window_inactive() {
        let window = BlockWindow::new(BlockSeconds::new(15));
        assert!(!window.is_active(0));
        assert!(!window.is_active(u32::MAX));
        assert_eq!(window.remaining_ms(0), 0);
    }

    #[test]
    fn armed_window_active_through_duration() {
        let mut window = BlockWindow::new(BlockSeconds::new(15));
        window.arm(5_000);

        assert!(window.is_active(5_000));
        assert!(window.is_active(12_345));
        assert!(window.is_active(20_000));
        assert!(!window.is_active(20_001));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut window = BlockWindow::new(BlockSeconds::new(15));
        window.arm(5_000);

        assert_eq!(window.remaining_ms(5_000), 15_000);
        assert_eq!(window.remaining_ms(10_000), 10_000);
        assert_eq!(window.remaining_ms(20_000), 0);
        assert_eq!(window.remaining_ms(30_000), 0);
    }

    #[test]
    fn survives_clock_wraparound() {
        let mut window = BlockWindow::new(BlockSeconds::new(10));
        window.arm(u32::MAX - 4_000);

        // 4001 ms later the clock has wrapped to 0
        assert!(window.is_active(0));
        assert_eq!(window.remaining_ms(0), 5_999);
        assert!(window.is_active(5_999));
        assert!(!window.is_active(6_000));
    }

    #[test]
    fn rearming_restarts_the_window() {
        let mut window = BlockWindow::new(BlockSeconds::new(1));
        window.arm(0);
        assert!(!window.is_active(2_000));

        window.arm(2_000);
        assert!(window.is_active(2_500));
        assert!(!window.is_active(3_001));
    }

    #[test]
    fn duration_update_applies_to_armed_window() {
        let mut window = BlockWindow::new(BlockSeconds::new(10));
        window.arm(0);
        assert!(window.is_active(9_000));

        window.set_duration(BlockSeconds::new(5));
        assert!(!window.is_active(9_000));
        assert!(window.is_active(4_000));
    }
}
