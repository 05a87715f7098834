use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::PowerDownStatus,
};

pub struct PowerDown;
impl Register for PowerDown {
    type Repr = PowerDownStatus;

    fn name(&self) -> &'static str {
        "PWD"
    }

    fn description(&self) -> &'static str {
        "Power down"
    }

    fn address(&self) -> u8 {
        0x00
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(1, 0)
    }

    fn default_value(&self) -> u8 {
        0b0
    }
}
