//! PA Controller Firmware Library
//!
//! This library provides the core functionality for an STM32G474-based
//! band-switch and PTT interlock controller for an HF power amplifier.
//! The controller decodes the 4-bit band-select code supplied by the
//! driving transceiver, drives the amplifier's band relays, and gates the
//! amplifier's PTT line so that RF is never applied while relays settle.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │        Control Loop  │  Telemetry / Debug Reporting          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     CONTROL LAYER                            │
//! │  Band Decode  │  Relay Mapping  │  Block Window  │ Interlock │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │            GPIO  │  Control Clock  │  Status LED             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Single owner for mutable state**: the interlock holds every mutable
//!   field; the control loop owns the interlock
//! - **Type-driven design**: custom types enforce invariants at compile time
//! - **No unsafe in application code**: all unsafe isolated in HAL/FFI layers
//! - **Functional core, imperative shell**: pure tick logic separated from I/O
//! - **Total core logic**: every core operation is defined over its whole
//!   input domain; inputs are sanitized at construction

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Provides safe abstractions over STM32G474 peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Amplifier Control Logic
///
/// The band-decode / PTT-interlock state machine and its block window.
pub mod amp;

/// Telemetry and Debug Reporting
///
/// Renders status snapshots and debug events for the external sinks.
pub mod telemetry;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::OutputPin;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
