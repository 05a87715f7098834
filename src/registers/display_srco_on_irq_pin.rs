use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::OutputSRCOOnIRQ,
};

pub struct DisplaySrcoOnIrqPin;
impl Register for DisplaySrcoOnIrqPin {
    type Repr = OutputSRCOOnIRQ;

    fn name(&self) -> &'static str {
        "DISP_SRCO"
    }

    fn description(&self) -> &'static str {
        "Display SRCO on IRQ pin"
    }

    fn address(&self) -> u8 {
        0x08
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(1, 6)
    }

    fn default_value(&self) -> u8 {
        0b0
    }
}
