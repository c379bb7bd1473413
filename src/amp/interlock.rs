//! PTT Interlock
//!
//! The central state machine of the controller. Once per control-loop
//! tick it combines the sampled PTT request, the decoded band code, and
//! the block window to decide whether the amplifier may be keyed and
//! whether the band relays must move.
//!
//! # Interlock invariant
//!
//! The band is never re-evaluated while PTT is pressed: a band relay must
//! not move while the amplifier may be carrying RF. Conversely, the PTT
//! output is never asserted while the post-change block window is active.

use crate::amp::block::BlockWindow;
use crate::types::{BandCode, BlockSeconds, InterlockSnapshot, OutputPattern, PttState};

/// Inputs sampled once at the start of a tick and held fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickInputs {
    /// PTT request (already decoded from the active-low input)
    pub ptt_pressed: bool,
    /// Raw band-select pin levels, index = bit
    pub band_pins: [bool; 4],
}

impl TickInputs {
    /// Create a tick input sample
    #[must_use]
    pub const fn new(ptt_pressed: bool, band_pins: [bool; 4]) -> Self {
        Self {
            ptt_pressed,
            band_pins,
        }
    }
}

/// Result of one tick evaluation
///
/// The shell applies `ptt_tx` to the amplifier PTT output every tick and
/// writes `pattern` to the relay bank only when present; the emission
/// fields are handed to the external sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutput {
    /// Level for the amplifier PTT output (active high)
    pub ptt_tx: bool,
    /// New relay drive, present only on ticks that change the band
    pub pattern: Option<OutputPattern>,
    /// Status snapshot, present only on state transitions
    pub snapshot: Option<InterlockSnapshot>,
    /// Debug event, present only on the edges described in [`DebugEvent`]
    pub debug: Option<DebugEvent>,
}

/// Edge-triggered debug event for the logging sink
///
/// Emitted at most once per tick and never repeated during steady state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugEvent {
    /// First band evaluation after boot latched the relays
    BandInitialized {
        /// Code latched at boot
        band: BandCode,
    },
    /// A band change was detected and the block window armed
    BandChanged {
        /// Previously selected code
        from: BandCode,
        /// Newly selected code
        to: BandCode,
    },
    /// A PTT request was refused because the block window is active
    TxDenied {
        /// Milliseconds until transmission becomes possible
        remaining_ms: u32,
    },
    /// The amplifier was keyed
    TxStarted,
    /// The amplifier was unkeyed
    TxEnded,
}

#[cfg(feature = "embedded")]
impl defmt::Format for DebugEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::BandInitialized { band } => defmt::write!(f, "band init: {}", band),
            Self::BandChanged { from, to } => {
                defmt::write!(f, "band change: {} -> {}", from, to);
            }
            Self::TxDenied { remaining_ms } => {
                defmt::write!(f, "tx denied, {} ms remaining", remaining_ms);
            }
            Self::TxStarted => defmt::write!(f, "tx start"),
            Self::TxEnded => defmt::write!(f, "tx end"),
        }
    }
}

/// Band-decode / PTT-interlock state machine
///
/// Owns all mutable state of the controller. Constructed once at startup
/// and driven by the control loop through [`Interlock::tick`]; nothing
/// else mutates it.
#[derive(Clone, Debug)]
pub struct Interlock {
    /// Current keying state
    ptt: PttState,
    /// Last applied band code; None until the first evaluation
    band: Option<BandCode>,
    /// Post-change settle window
    block: BlockWindow,
    /// A denial was already reported for the ongoing PTT request
    denial_reported: bool,
}

impl Interlock {
    /// Create a new interlock in RX with no band latched
    #[must_use]
    pub const fn new(block_duration: BlockSeconds) -> Self {
        Self {
            ptt: PttState::Rx,
            band: None,
            block: BlockWindow::new(block_duration),
            denial_reported: false,
        }
    }

    /// Get the current keying state
    #[must_use]
    pub const fn ptt(&self) -> PttState {
        self.ptt
    }

    /// Get the currently applied band code
    #[must_use]
    pub const fn band(&self) -> Option<BandCode> {
        self.band
    }

    /// Check whether the block window forbids transmission at `now_ms`
    #[must_use]
    pub fn is_blocked(&self, now_ms: u32) -> bool {
        self.block.is_active(now_ms)
    }

    /// Update the configured block duration (configuration push)
    pub fn set_block_duration(&mut self, duration: BlockSeconds) {
        self.block.set_duration(duration);
    }

    /// Evaluate one control-loop tick
    ///
    /// Inputs are sampled by the caller and held fixed for the whole
    /// evaluation. The returned [`TickOutput`] tells the shell what to
    /// drive and what to report; this function performs no I/O and
    /// cannot fail.
    pub fn tick(&mut self, inputs: TickInputs, now_ms: u32) -> TickOutput {
        let entry_ptt = self.ptt;
        let mut pattern = None;
        let mut debug = None;
        let mut band_event = false;

        if inputs.ptt_pressed {
            // Band stays frozen for the whole press.
            if self.block.is_active(now_ms) {
                self.ptt = PttState::Rx;
                if !self.denial_reported {
                    self.denial_reported = true;
                    debug = Some(DebugEvent::TxDenied {
                        remaining_ms: self.block.remaining_ms(now_ms),
                    });
                }
            } else {
                self.ptt = PttState::Tx;
                self.denial_reported = false;
                if !entry_ptt.is_tx() {
                    debug = Some(DebugEvent::TxStarted);
                }
            }
        } else {
            self.ptt = PttState::Rx;
            self.denial_reported = false;
            if entry_ptt.is_tx() {
                debug = Some(DebugEvent::TxEnded);
            }

            let code = BandCode::from_pins(inputs.band_pins);
            match self.band {
                None => {
                    // Boot latch-up: drive the relays but leave the block
                    // window unarmed, there was no prior band to settle from.
                    self.band = Some(code);
                    pattern = Some(OutputPattern::for_band(code));
                    debug = Some(DebugEvent::BandInitialized { band: code });
                    band_event = true;
                }
                Some(previous) if previous != code => {
                    self.band = Some(code);
                    pattern = Some(OutputPattern::for_band(code));
                    self.block.arm(now_ms);
                    debug = Some(DebugEvent::BandChanged {
                        from: previous,
                        to: code,
                    });
                    band_event = true;
                }
                Some(_) => {}
            }
        }

        let snapshot = if self.ptt != entry_ptt || band_event {
            Some(self.snapshot(now_ms))
        } else {
            None
        };

        TickOutput {
            ptt_tx: self.ptt.is_tx(),
            pattern,
            snapshot,
            debug,
        }
    }

    /// Build a status snapshot of the current state
    ///
    /// The band field reports the fail-safe all-on code until the first
    /// evaluation has latched a real one.
    #[must_use]
    pub fn snapshot(&self, now_ms: u32) -> InterlockSnapshot {
        InterlockSnapshot {
            ptt: self.ptt,
            band: self.band.unwrap_or(BandCode::from_raw(BandCode::MAX)),
            block_active: self.block.is_active(now_ms),
            block_ms_remaining: self.block.remaining_ms(now_ms),
        }
    }
}

impl Default for Interlock {
    fn default() -> Self {
        Self::new(BlockSeconds::new(crate::config::DEFAULT_BLOCK_SECONDS))
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Interlock {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Interlock({}, {})", self.ptt, self.block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(code: u8) -> [bool; 4] {
        [
            code & 0x01 != 0,
            code & 0x02 != 0,
            code & 0x04 != 0,
            code & 0x08 != 0,
        ]
    }

    #[test]
    fn denial_reported_once_per_press() {
        let mut interlock = Interlock::new(BlockSeconds::new(15));
        interlock.tick(TickInputs::new(false, pins(7)), 0);
        interlock.tick(TickInputs::new(false, pins(10)), 1_000);

        let out = interlock.tick(TickInputs::new(true, pins(10)), 2_000);
        assert!(matches!(out.debug, Some(DebugEvent::TxDenied { .. })));

        // Still pressed, still blocked: no repeat.
        for t in (2_005..5_000).step_by(5) {
            let out = interlock.tick(TickInputs::new(true, pins(10)), t);
            assert_eq!(out.debug, None);
            assert!(!out.ptt_tx);
        }
    }

    #[test]
    fn denial_rearms_after_release() {
        let mut interlock = Interlock::new(BlockSeconds::new(15));
        interlock.tick(TickInputs::new(false, pins(7)), 0);
        interlock.tick(TickInputs::new(false, pins(10)), 1_000);

        let out = interlock.tick(TickInputs::new(true, pins(10)), 2_000);
        assert!(matches!(out.debug, Some(DebugEvent::TxDenied { .. })));

        interlock.tick(TickInputs::new(false, pins(10)), 3_000);

        // A fresh press while still blocked reports a fresh denial.
        let out = interlock.tick(TickInputs::new(true, pins(10)), 4_000);
        assert!(matches!(out.debug, Some(DebugEvent::TxDenied { .. })));
    }

    #[test]
    fn released_denial_emits_no_tx_ended() {
        let mut interlock = Interlock::new(BlockSeconds::new(15));
        interlock.tick(TickInputs::new(false, pins(7)), 0);
        interlock.tick(TickInputs::new(false, pins(10)), 1_000);
        interlock.tick(TickInputs::new(true, pins(10)), 2_000);

        // The amplifier never keyed, so release is not a TX end.
        let out = interlock.tick(TickInputs::new(false, pins(10)), 3_000);
        assert_eq!(out.debug, None);
        assert_eq!(out.snapshot, None);
    }
}
