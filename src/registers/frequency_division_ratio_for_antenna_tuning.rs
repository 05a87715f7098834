use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::FrequencyDivisionRatio,
};

pub struct FrequencyDivisionRatioForAntennaTuning;
impl Register for FrequencyDivisionRatioForAntennaTuning {
    type Repr = FrequencyDivisionRatio;

    fn name(&self) -> &'static str {
        "LCO_FDIV"
    }

    fn description(&self) -> &'static str {
        "Frequency division ratio for antenna tuning"
    }

    fn address(&self) -> u8 {
        0x03
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(2, 6)
    }

    fn default_value(&self) -> u8 {
        0b_00
    }
}
