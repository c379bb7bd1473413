//! PA Controller Main Application
//!
//! Entry point for the STM32G474-based amplifier controller firmware.
//! Initializes hardware and spawns async tasks.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use {defmt_rtt as _, panic_probe as _};

use pa_controller::amp::interlock::{Interlock, TickInputs};
use pa_controller::hal::gpio::{BandSelectInput, PttInput, PttOutput, RelayBank, StatusLed};
use pa_controller::hal::timer::{now_ms, ControlClock};
use pa_controller::prelude::*;
use pa_controller::telemetry::{DebugLine, StatusReport};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("PA Controller Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Status LED (PA5 on Nucleo boards)
    let led = StatusLed::new(Output::new(p.PA5, Level::Low, Speed::Low));

    // Band-select inputs from the transceiver. Pulled down so floating
    // lines read as code 0, which maps to the fail-safe all-on pattern.
    let band_in = BandSelectInput::new(
        Input::new(p.PA0, Pull::Down),
        Input::new(p.PA1, Pull::Down),
        Input::new(p.PA2, Pull::Down),
        Input::new(p.PA3, Pull::Down),
    );

    // PTT request, active low with pull-up
    let ptt_in = PttInput::new(Input::new(p.PA4, Pull::Up));

    // Band relay coils, released at power-up
    let relays = RelayBank::new(
        Output::new(p.PB0, Level::Low, Speed::Low),
        Output::new(p.PB1, Level::Low, Speed::Low),
        Output::new(p.PB2, Level::Low, Speed::Low),
        Output::new(p.PB10, Level::Low, Speed::Low),
    );

    // Amplifier PTT output, unkeyed at power-up
    let ptt_out = PttOutput::new(Output::new(p.PB5, Level::Low, Speed::Low));

    info!("GPIO initialized");

    // Spawn background tasks
    spawner.spawn(heartbeat_task(led)).unwrap();
    spawner
        .spawn(control_task(band_in, ptt_in, relays, ptt_out))
        .unwrap();

    info!("Tasks spawned, entering main loop");

    // Main loop - additional coordination can happen here
    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!("Main loop tick");
    }
}

/// Control-loop task - owns the interlock and drives the outputs
///
/// Samples the inputs once per tick, evaluates the interlock, applies
/// the outputs, and hands emissions to the debug and telemetry sinks.
#[embassy_executor::task]
async fn control_task(
    band_in: BandSelectInput<'static>,
    ptt_in: PttInput<'static>,
    mut relays: RelayBank<'static>,
    mut ptt_out: PttOutput<'static>,
) {
    let mut interlock = Interlock::new(BlockSeconds::new(DEFAULT_BLOCK_SECONDS));
    let mut clock = ControlClock::from_period_ms(CONTROL_TICK_MS);
    let mut report = StatusReport::new();
    let mut line = DebugLine::new();

    loop {
        clock.tick().await;

        let inputs = TickInputs::new(ptt_in.is_pressed(), band_in.read());
        let output = interlock.tick(inputs, now_ms());

        if let Some(pattern) = output.pattern {
            relays.apply(pattern);
        }
        ptt_out.apply(output.ptt_tx);

        if let Some(event) = output.debug {
            line.render(&event);
            info!("{}", line.as_str());
        }

        if let Some(snapshot) = output.snapshot {
            report.render(&snapshot);
            info!("status: {}", report.as_str());
        }
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: StatusLed<'static>) {
    loop {
        led.on();
        Timer::after(Duration::from_millis(HEARTBEAT_ON_MS)).await;
        led.off();
        Timer::after(Duration::from_millis(HEARTBEAT_OFF_MS)).await;
    }
}
