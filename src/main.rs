//! Runs the driver against the simulated sensor and logs a short storm rolling in.

#[macro_use]
extern crate tracing;

use std::{thread, time::Duration};

use anyhow::{anyhow, Result};
use as3935::{
    sim::{SimulatedChip, StdDelay},
    CalibrationConstant, Config, DeviceState, Sensor,
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// (raw distance, energy) of each strike, far to overhead
const STORM: [(u8, u32); 5] = [
    (40, 0x00_1F40),
    (31, 0x00_8A12),
    (20, 0x01_1D00),
    (8, 0x07_4C31),
    (1, 0x1F_FFFF),
];
const STRIKE_INTERVAL: Duration = Duration::from_millis(400);

fn init_logging() -> Result<()> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env()?,
            )
            .finish(),
    )?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let chip = SimulatedChip::new();
    let calibration = CalibrationConstant::from_fields(0b0101, 0b010, 0b1_0010);
    let mut sensor = Sensor::with_calibration(chip.clone(), chip.irq_line(), calibration);
    sensor.begin(&mut StdDelay)?;
    sensor.configure(&Config {
        strike_threshold: Some(1),
        ..Default::default()
    })?;
    info!(
        "listening: noise floor {}uVrms, antenna tuning {}pF, calibration {:#06x}",
        sensor.noise_floor()?,
        sensor.tuning_capacitance_pf()?,
        sensor.get_calibration()?.0,
    );

    let weather = chip.clone();
    let storm = thread::spawn(move || {
        for (distance, energy) in STORM {
            thread::sleep(STRIKE_INTERVAL);
            weather.strike(distance, energy);
        }
    });

    for _ in 0..STORM.len() {
        smol::block_on(sensor.pending_event().wait());
        match sensor.state()? {
            DeviceState::Lightning => {
                let distance = sensor.storm_distance()?;
                let energy = sensor.lightning_energy()?;
                match distance.kilometers() {
                    Some(0) => info!("lightning overhead! (energy {energy})"),
                    Some(km) => info!("lightning {km}km away (energy {energy})"),
                    None => info!("lightning, distance unknown (energy {energy})"),
                }
            }
            DeviceState::Unknown => warn!("sensor did not respond, check the wiring"),
            other => info!("sensor state: {other:?}"),
        }
    }

    storm
        .join()
        .map_err(|_| anyhow!("storm thread panicked"))?;
    sensor.release()?;
    info!("done");
    Ok(())
}
