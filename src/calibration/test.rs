use crate::{
    sim::{SimulatedChip, SimulatedIrq},
    CalibrationConstant, Sensor,
};

fn sensor() -> (SimulatedChip, Sensor<SimulatedChip, SimulatedIrq>) {
    let chip = SimulatedChip::new();
    let sensor = Sensor::new(chip.clone(), chip.irq_line());
    (chip, sensor)
}

#[test]
fn fields_come_from_their_bits() {
    let c = CalibrationConstant(0b0000_1010_1011_0110);
    assert_eq!(c.tun_cap(), 0b1010);
    assert_eq!(c.nf_lev(), 0b101);
    assert_eq!(c.afe_gb(), 0b1_0110);
    assert_eq!(CalibrationConstant::from_fields(0b1010, 0b101, 0b1_0110), c);
}

#[test]
fn every_significant_value_survives_the_sensor() {
    let (_chip, mut sensor) = sensor();
    for word in 0..=CalibrationConstant::SIGNIFICANT {
        let c = CalibrationConstant(word);
        sensor.set_calibration(c).unwrap();
        assert_eq!(sensor.get_calibration().unwrap(), c, "{word:#06x}");
    }
}

#[test]
fn reserved_bits_are_ignored() {
    let (_chip, mut sensor) = sensor();
    sensor.set_calibration(CalibrationConstant(0xF123)).unwrap();
    assert_eq!(sensor.get_calibration().unwrap(), CalibrationConstant(0x0123));
}

#[test]
fn calibration_leaves_neighbouring_fields_alone() {
    let (chip, mut sensor) = sensor();
    // PWD=1, WDTH=0xA, DISP_LCO+DISP_SRCO
    chip.poke(0x00, 0b0000_0001);
    chip.poke(0x01, 0b0000_1010);
    chip.poke(0x08, 0b1100_0000);

    sensor.set_calibration(CalibrationConstant(0x0FFF)).unwrap();

    assert_eq!(chip.peek(0x00), 0b0011_1111);
    assert_eq!(chip.peek(0x01), 0b0111_1010);
    assert_eq!(chip.peek(0x08), 0b1100_1111);
}

#[test]
fn persisted_as_a_plain_integer() {
    let c = CalibrationConstant(0x0ABC);
    let bytes = rmp_serde::to_vec(&c).unwrap();
    assert_eq!(bytes, rmp_serde::to_vec(&0x0ABCu16).unwrap());
    let back: CalibrationConstant = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(back, c);
}
