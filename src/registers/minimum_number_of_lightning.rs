use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::MinimumLightningThreshold,
};

pub struct MinimumNumberOfLightning;
impl Register for MinimumNumberOfLightning {
    type Repr = MinimumLightningThreshold;

    fn name(&self) -> &'static str {
        "MIN_NUM_LIGH"
    }

    fn description(&self) -> &'static str {
        "Minimum number of lightning"
    }

    fn address(&self) -> u8 {
        0x02
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(2, 4)
    }

    fn default_value(&self) -> u8 {
        0b_00
    }
}
