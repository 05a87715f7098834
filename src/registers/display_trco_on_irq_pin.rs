use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::OutputTRCOOnIRQ,
};

pub struct DisplayTrcoOnIrqPin;
impl Register for DisplayTrcoOnIrqPin {
    type Repr = OutputTRCOOnIRQ;

    fn name(&self) -> &'static str {
        "DISP_TRCO"
    }

    fn description(&self) -> &'static str {
        "Display TRCO on IRQ pin"
    }

    fn address(&self) -> u8 {
        0x08
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(1, 5)
    }

    fn default_value(&self) -> u8 {
        0b0
    }
}
