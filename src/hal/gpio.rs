//! GPIO Abstractions
//!
//! Type-safe GPIO pin wrappers for the amplifier controller.
//! Provides semantic meaning to pins through the type system.

use embassy_stm32::gpio::{Input, Output};

use crate::types::OutputPattern;

/// Status LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Status LED driver
pub struct StatusLed<'d> {
    pin: Output<'d>,
    state: LedState,
}

impl<'d> StatusLed<'d> {
    /// Create a new status LED (initially off)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self {
            pin,
            state: LedState::Off,
        }
    }

    /// Turn LED on
    pub fn on(&mut self) {
        self.pin.set_high();
        self.state = LedState::On;
    }

    /// Turn LED off
    pub fn off(&mut self) {
        self.pin.set_low();
        self.state = LedState::Off;
    }

    /// Toggle LED state
    pub fn toggle(&mut self) {
        match self.state {
            LedState::Off => self.on(),
            LedState::On => self.off(),
        }
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }
}

/// PTT (Push-to-Talk) request input
pub struct PttInput<'d> {
    pin: Input<'d>,
}

impl<'d> PttInput<'d> {
    /// Create a new PTT input (active low with internal pull-up)
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Check if PTT is pressed (active low)
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }

    /// Check if PTT is released
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.pin.is_high()
    }
}

/// Amplifier PTT output (active high)
pub struct PttOutput<'d> {
    pin: Output<'d>,
    keyed: bool,
}

impl<'d> PttOutput<'d> {
    /// Create the amplifier PTT output (starts unkeyed)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin, keyed: false }
    }

    /// Drive the output to the requested level
    pub fn apply(&mut self, keyed: bool) {
        if keyed {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.keyed = keyed;
    }

    /// Check if the amplifier is keyed
    #[must_use]
    pub const fn is_keyed(&self) -> bool {
        self.keyed
    }
}

/// Band-select input lines from the transceiver
///
/// Four digital inputs; reading *i* becomes bit *i* of the band code.
pub struct BandSelectInput<'d> {
    in0: Input<'d>,
    in1: Input<'d>,
    in2: Input<'d>,
    in3: Input<'d>,
}

impl<'d> BandSelectInput<'d> {
    /// Create the band-select input bank
    #[must_use]
    pub fn new(in0: Input<'d>, in1: Input<'d>, in2: Input<'d>, in3: Input<'d>) -> Self {
        Self { in0, in1, in2, in3 }
    }

    /// Sample all four lines (index = bit, HIGH = true)
    #[must_use]
    pub fn read(&self) -> [bool; 4] {
        [
            self.in0.is_high(),
            self.in1.is_high(),
            self.in2.is_high(),
            self.in3.is_high(),
        ]
    }
}

/// Band relay output bank
///
/// Drives the 4 relay coils from an [`OutputPattern`]; output pin *i*
/// follows pattern bit *i*.
pub struct RelayBank<'d> {
    out0: Output<'d>,
    out1: Output<'d>,
    out2: Output<'d>,
    out3: Output<'d>,
    current: Option<OutputPattern>,
}

impl<'d> RelayBank<'d> {
    /// Create the relay bank (all coils released until the first apply)
    #[must_use]
    pub fn new(out0: Output<'d>, out1: Output<'d>, out2: Output<'d>, out3: Output<'d>) -> Self {
        Self {
            out0,
            out1,
            out2,
            out3,
            current: None,
        }
    }

    /// Drive the relay coils to the given pattern
    pub fn apply(&mut self, pattern: OutputPattern) {
        if pattern.drives(0) {
            self.out0.set_high();
        } else {
            self.out0.set_low();
        }

        if pattern.drives(1) {
            self.out1.set_high();
        } else {
            self.out1.set_low();
        }

        if pattern.drives(2) {
            self.out2.set_high();
        } else {
            self.out2.set_low();
        }

        if pattern.drives(3) {
            self.out3.set_high();
        } else {
            self.out3.set_low();
        }

        self.current = Some(pattern);
    }

    /// Get the last applied pattern
    #[must_use]
    pub const fn current(&self) -> Option<OutputPattern> {
        self.current
    }
}
