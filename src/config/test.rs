use embedded_hal_mock::eh1::delay::NoopDelay;
use tracing_test::traced_test;

use super::Config;
use crate::{
    repr::SensorLocation,
    sim::{SimulatedChip, SimulatedIrq},
    CalibrationConstant, Error, Sensor,
};

fn running() -> (SimulatedChip, Sensor<SimulatedChip, SimulatedIrq>) {
    let chip = SimulatedChip::new();
    let mut sensor = Sensor::new(chip.clone(), chip.irq_line());
    sensor.begin(&mut NoopDelay).unwrap();
    chip.clear_writes();
    (chip, sensor)
}

#[test]
#[traced_test]
fn applies_every_setting() {
    let (_chip, mut sensor) = running();
    let config = Config {
        location: SensorLocation::Outdoor,
        noise_floor_uvrms: Some(700),
        signal_threshold: Some(7),
        spike_rejection: Some(4),
        strike_threshold: Some(6),
        mask_disturbers: true,
        calibration: None,
    };
    sensor.configure(&config).unwrap();

    assert!(!sensor.is_indoors().unwrap());
    assert_eq!(sensor.noise_floor().unwrap(), 860);
    assert_eq!(sensor.signal_threshold().unwrap(), 7);
    assert_eq!(sensor.spike_rejection().unwrap(), 4);
    assert_eq!(sensor.strike_threshold().unwrap(), 9);
    assert!(sensor.disturbers_squelched().unwrap());
    assert!(logs_contain("sensor configured"));
}

#[test]
fn rejected_config_writes_nothing() {
    let (chip, mut sensor) = running();
    let bad = [
        Config {
            noise_floor_uvrms: Some(147),
            ..Default::default()
        },
        Config {
            signal_threshold: Some(16),
            ..Default::default()
        },
        Config {
            spike_rejection: Some(200),
            ..Default::default()
        },
        Config {
            strike_threshold: Some(17),
            mask_disturbers: true,
            ..Default::default()
        },
    ];
    for config in bad {
        let err = sensor.configure(&config).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }), "{err:?}");
        assert!(chip.writes().is_empty(), "{config:?}");
    }
}

#[test]
fn noise_floor_follows_the_configured_location() {
    let (_chip, mut sensor) = running();
    // 1000 is beyond the indoor table but fine outdoors
    let config = Config {
        location: SensorLocation::Outdoor,
        noise_floor_uvrms: Some(1000),
        ..Default::default()
    };
    sensor.configure(&config).unwrap();
    assert_eq!(sensor.noise_floor().unwrap(), 1100);
}

#[test]
fn calibration_is_applied_and_kept_for_begin() {
    let (chip, mut sensor) = running();
    let calibration = CalibrationConstant::from_fields(0b0110, 0b011, 0b1_0010);
    let config = Config {
        calibration: Some(calibration),
        ..Default::default()
    };
    sensor.configure(&config).unwrap();
    assert_eq!(sensor.get_calibration().unwrap(), calibration);
    assert_eq!(sensor.stored_calibration(), Some(calibration));

    sensor.begin(&mut NoopDelay).unwrap();
    assert_eq!(chip.peek(0x08) & 0x0F, 0b0110);
}

#[test]
fn missing_fields_take_defaults() {
    let bytes = rmp_serde::to_vec_named(&Config::default()).unwrap();
    let config: Config = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(config, Config::default());

    #[derive(serde::Serialize)]
    struct Partial {
        location: SensorLocation,
        strike_threshold: Option<u8>,
    }
    let bytes = rmp_serde::to_vec_named(&Partial {
        location: SensorLocation::Outdoor,
        strike_threshold: Some(5),
    })
    .unwrap();
    let config: Config = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(config.location, SensorLocation::Outdoor);
    assert_eq!(config.strike_threshold, Some(5));
    assert_eq!(config.noise_floor_uvrms, None);
    assert!(!config.mask_disturbers);
}

#[test]
fn calibration_persists_as_a_number() {
    let config = Config {
        calibration: Some(CalibrationConstant(0x0321)),
        ..Default::default()
    };
    let bytes = rmp_serde::to_vec_named(&config).unwrap();
    let back: Config = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(back, config);
}
