use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::AfeGain,
};

pub struct AfeGainBoost;
impl Register for AfeGainBoost {
    type Repr = AfeGain;

    fn name(&self) -> &'static str {
        "AFE_GB"
    }

    fn description(&self) -> &'static str {
        "AFE gain boost"
    }

    fn address(&self) -> u8 {
        0x00
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(5, 1)
    }

    fn default_value(&self) -> u8 {
        0b1_0010
    }
}
