//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --no-default-features --features std --test config_tests

use pa_controller::config::*;

// =============================================================================
// Timing Tests
// =============================================================================

#[test]
fn system_clock_valid() {
    // STM32G474 max clock is 170 MHz
    assert_eq!(SYSTEM_CLOCK_HZ, 170_000_000);
}

#[test]
fn control_tick_divides_one_second() {
    assert!(CONTROL_TICK_MS > 0);
    assert_eq!(1_000 % CONTROL_TICK_MS, 0);
}

#[test]
fn control_tick_small_against_minimum_block() {
    // One tick of overshoot must be negligible against the shortest window
    assert!(CONTROL_TICK_MS * 100 <= block_duration_ms(BLOCK_SECONDS_MIN));
}

// =============================================================================
// Block Duration Tests
// =============================================================================

#[test]
fn block_bounds_ordered() {
    assert!(BLOCK_SECONDS_MIN < BLOCK_SECONDS_MAX);
    assert_eq!(BLOCK_SECONDS_MIN, 1);
    assert_eq!(BLOCK_SECONDS_MAX, 600);
}

#[test]
fn default_block_in_range() {
    assert!(DEFAULT_BLOCK_SECONDS >= BLOCK_SECONDS_MIN);
    assert!(DEFAULT_BLOCK_SECONDS <= BLOCK_SECONDS_MAX);
}

#[test]
fn block_duration_ms_conversion() {
    assert_eq!(block_duration_ms(1), 1_000);
    assert_eq!(block_duration_ms(600), 600_000);
}

#[test]
fn maximum_block_far_below_clock_wrap() {
    // Wrapping-clock arithmetic needs the window to be tiny against 2^32 ms
    assert!(u64::from(block_duration_ms(BLOCK_SECONDS_MAX)) * 1_000 < u64::from(u32::MAX));
}

// =============================================================================
// I/O Width Tests
// =============================================================================

#[test]
fn band_bus_is_four_bits() {
    assert_eq!(BAND_INPUT_COUNT, 4);
    assert_eq!(RELAY_OUTPUT_COUNT, 4);
}

// =============================================================================
// Buffer Size Tests
// =============================================================================

#[test]
fn status_report_fits_longest_payload() {
    // "ptt=RX band=15 block=1 remaining_ms=600000"
    let longest = "ptt=RX band=15 block=1 remaining_ms=600000";
    assert!(longest.len() <= STATUS_REPORT_SIZE);
}

#[test]
fn debug_line_fits_longest_message() {
    // "tx denied, 600000 ms remaining"
    let longest = "tx denied, 600000 ms remaining";
    assert!(longest.len() <= DEBUG_LINE_SIZE);
}

// =============================================================================
// Pin Map Tests
// =============================================================================

#[test]
fn pins_all_distinct() {
    let all = [
        pins::LED_STATUS,
        pins::BAND_IN0,
        pins::BAND_IN1,
        pins::BAND_IN2,
        pins::BAND_IN3,
        pins::PTT_IN,
        pins::RELAY_OUT0,
        pins::RELAY_OUT1,
        pins::RELAY_OUT2,
        pins::RELAY_OUT3,
        pins::PTT_OUT,
    ];

    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b, "pin {a} assigned twice");
        }
    }
}
