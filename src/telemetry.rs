//! Telemetry and Debug Reporting
//!
//! Renders interlock emissions into fixed-capacity buffers for the
//! external sinks: a `key=value` payload per status snapshot for the
//! publish/subscribe collaborator, and a human-readable line per debug
//! event for the logging collaborator. The core only constructs the
//! values; all formatting happens here at the boundary.

use heapless::String;

use crate::amp::interlock::DebugEvent;
use crate::config::{DEBUG_LINE_SIZE, STATUS_REPORT_SIZE};
use crate::types::InterlockSnapshot;

/// Status report formatter
///
/// Renders snapshots as `ptt=RX band=10 block=1 remaining_ms=15000`.
/// The capacity covers the longest possible rendering, so truncation
/// cannot occur.
pub struct StatusReport {
    buffer: String<STATUS_REPORT_SIZE>,
}

impl StatusReport {
    /// Create a new report formatter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Render a snapshot into the buffer
    pub fn render(&mut self, snapshot: &InterlockSnapshot) {
        self.buffer.clear();
        let block = u8::from(snapshot.block_active);
        let _ = core::fmt::write(
            &mut self.buffer,
            format_args!(
                "ptt={} band={} block={} remaining_ms={}",
                snapshot.ptt.as_str(),
                snapshot.band.as_u8(),
                block,
                snapshot.block_ms_remaining
            ),
        );
    }

    /// Get the report string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the report bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug line formatter
pub struct DebugLine {
    buffer: String<DEBUG_LINE_SIZE>,
}

impl DebugLine {
    /// Create a new debug line formatter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Render a debug event into the buffer
    pub fn render(&mut self, event: &DebugEvent) {
        self.buffer.clear();
        match event {
            DebugEvent::BandInitialized { band } => {
                let _ = core::fmt::write(
                    &mut self.buffer,
                    format_args!("band init: {}", band.as_u8()),
                );
            }
            DebugEvent::BandChanged { from, to } => {
                let _ = core::fmt::write(
                    &mut self.buffer,
                    format_args!("band change: {} -> {}", from.as_u8(), to.as_u8()),
                );
            }
            DebugEvent::TxDenied { remaining_ms } => {
                let _ = core::fmt::write(
                    &mut self.buffer,
                    format_args!("tx denied, {remaining_ms} ms remaining"),
                );
            }
            DebugEvent::TxStarted => {
                let _ = self.buffer.push_str("tx start");
            }
            DebugEvent::TxEnded => {
                let _ = self.buffer.push_str("tx end");
            }
        }
    }

    /// Get the line string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the line bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DebugLine {
    fn default() -> Self {
        Self::new()
    }
}
