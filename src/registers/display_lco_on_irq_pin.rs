use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::OutputLCOOnIRQ,
};

pub struct DisplayLcoOnIrqPin;
impl Register for DisplayLcoOnIrqPin {
    type Repr = OutputLCOOnIRQ;

    fn name(&self) -> &'static str {
        "DISP_LCO"
    }

    fn description(&self) -> &'static str {
        "Display LCO on IRQ pin"
    }

    fn address(&self) -> u8 {
        0x08
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(1, 7)
    }

    fn default_value(&self) -> u8 {
        0b0
    }
}
