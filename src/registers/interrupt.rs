use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::IrqReason,
};

pub struct Interrupt;
impl Register for Interrupt {
    type Repr = IrqReason;

    fn name(&self) -> &'static str {
        "INT"
    }

    fn description(&self) -> &'static str {
        "Interrupt"
    }

    fn address(&self) -> u8 {
        0x03
    }

    fn mode(&self) -> Mode {
        Mode::Read
    }

    fn field(&self) -> Field {
        Field::new(4, 0)
    }

    fn default_value(&self) -> u8 {
        0b_0000
    }
}
