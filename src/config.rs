//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the amplifier controller
//! hardware. All pin mappings, timing parameters, and limits are
//! centralized here.

/// System clock frequency (STM32G474 @ 170MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 170_000_000;

/// Control loop tick period in milliseconds
///
/// Block-window timing tolerates at worst one tick of overshoot, so the
/// period only has to stay small relative to the minimum block duration.
pub const CONTROL_TICK_MS: u32 = 5;

/// Number of band-select input lines from the transceiver
pub const BAND_INPUT_COUNT: usize = 4;

/// Number of band relay outputs
pub const RELAY_OUTPUT_COUNT: usize = 4;

/// Minimum configurable TX block duration in seconds
pub const BLOCK_SECONDS_MIN: u16 = 1;

/// Maximum configurable TX block duration in seconds
pub const BLOCK_SECONDS_MAX: u16 = 600;

/// Default TX block duration in seconds
pub const DEFAULT_BLOCK_SECONDS: u16 = 15;

/// Status report buffer size in bytes
pub const STATUS_REPORT_SIZE: usize = 48;

/// Debug line buffer size in bytes
pub const DEBUG_LINE_SIZE: usize = 48;

/// Heartbeat LED on time in milliseconds
pub const HEARTBEAT_ON_MS: u64 = 100;

/// Heartbeat LED off time in milliseconds
pub const HEARTBEAT_OFF_MS: u64 = 900;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// Band-select input bit 0 (from transceiver)
    pub const BAND_IN0: &str = "PA0";

    /// Band-select input bit 1 (from transceiver)
    pub const BAND_IN1: &str = "PA1";

    /// Band-select input bit 2 (from transceiver)
    pub const BAND_IN2: &str = "PA2";

    /// Band-select input bit 3 (from transceiver)
    pub const BAND_IN3: &str = "PA3";

    /// PTT request input (active low)
    pub const PTT_IN: &str = "PA4";

    /// Band relay drive bit 0
    pub const RELAY_OUT0: &str = "PB0";

    /// Band relay drive bit 1
    pub const RELAY_OUT1: &str = "PB1";

    /// Band relay drive bit 2
    pub const RELAY_OUT2: &str = "PB2";

    /// Band relay drive bit 3
    pub const RELAY_OUT3: &str = "PB10";

    /// Amplifier PTT output (active high)
    pub const PTT_OUT: &str = "PB5";
}

/// Convert a block duration in seconds to milliseconds
#[must_use]
pub const fn block_duration_ms(seconds: u16) -> u32 {
    seconds as u32 * 1000
}
