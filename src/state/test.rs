use embedded_hal_mock::eh1::delay::NoopDelay;
use tracing_test::traced_test;

use super::DeviceState;
use crate::{
    repr::IrqReason,
    sim::{SimulatedChip, SimulatedIrq},
    Sensor,
};

fn running() -> (SimulatedChip, Sensor<SimulatedChip, SimulatedIrq>) {
    let chip = SimulatedChip::new();
    let mut sensor = Sensor::new(chip.clone(), chip.irq_line());
    sensor.begin(&mut NoopDelay).unwrap();
    (chip, sensor)
}

#[test]
#[traced_test]
fn sanity_mismatch_is_unknown_whatever_the_irq() {
    let (chip, mut sensor) = running();
    chip.poke(0x09, 0x00);
    chip.raise(IrqReason::LIGHTNING);

    assert_eq!(sensor.state().unwrap(), DeviceState::Unknown);
    // nothing past the sanity check was read
    assert_eq!(chip.peek(0x03) & 0x0F, IrqReason::LIGHTNING.bits());
    assert!(sensor.available());
    assert!(logs_contain("sanity check failed"));
}

#[test]
fn quiet_sensor_reports_its_power_state() {
    let (chip, mut sensor) = running();
    assert_eq!(sensor.state().unwrap(), DeviceState::Listening);

    sensor.power(false).unwrap();
    assert_eq!(chip.peek(0x00) & 1, 1);
    assert_eq!(sensor.state().unwrap(), DeviceState::PowerDown);

    sensor.power(true).unwrap();
    assert_eq!(sensor.state().unwrap(), DeviceState::Listening);
}

#[test]
fn lightning_beats_disturber_beats_noise() {
    for bits in 0u8..=0b1111 {
        let reason = IrqReason::from_bits_retain(bits);
        let expected = if bits == 0 {
            continue;
        } else if bits & 0b1000 != 0 {
            DeviceState::Lightning
        } else if bits & 0b0100 != 0 {
            DeviceState::Disturber
        } else if bits & 0b0001 != 0 {
            DeviceState::Noisy
        } else {
            DeviceState::UnrecognizedIrq(bits)
        };
        assert_eq!(DeviceState::from_irq(reason), expected, "{bits:#06b}");
    }
}

#[test]
#[traced_test]
fn unrecognized_reason_is_reported_not_dropped() {
    let (chip, mut sensor) = running();
    chip.raise(IrqReason::from_bits_retain(0b0010));
    assert_eq!(sensor.state().unwrap(), DeviceState::UnrecognizedIrq(0b0010));
    assert!(logs_contain("unrecognized interrupt reason"));
}

#[test]
fn reading_the_state_consumes_the_reason() {
    let (chip, mut sensor) = running();
    chip.raise(IrqReason::DISTURBER | IrqReason::NOISE_HIGH);
    assert_eq!(sensor.state().unwrap(), DeviceState::Disturber);
    assert_eq!(sensor.state().unwrap(), DeviceState::Listening);
}

#[test]
fn pending_event_lifecycle() {
    let (chip, mut sensor) = running();
    assert!(!sensor.available());

    chip.strike(12, 0x01_2345);
    assert!(sensor.available());
    assert!(sensor.available());

    assert_eq!(sensor.state().unwrap(), DeviceState::Lightning);
    assert!(!sensor.available());
    assert!(!sensor.available());

    chip.raise(IrqReason::NOISE_HIGH);
    assert!(sensor.available());
    sensor.clear();
    assert!(!sensor.available());
    assert_eq!(sensor.state().unwrap(), DeviceState::Noisy);
}

#[test]
fn state_clears_the_flag_even_with_nothing_to_report() {
    let (_chip, mut sensor) = running();
    sensor.irq_handle().signal();
    assert!(sensor.available());
    assert_eq!(sensor.state().unwrap(), DeviceState::Listening);
    assert!(!sensor.available());
}

#[test]
fn powered_down_chip_does_not_interrupt() {
    let (chip, mut sensor) = running();
    sensor.power(false).unwrap();
    chip.strike(12, 1);
    assert!(!sensor.available());
}
