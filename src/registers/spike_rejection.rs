use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::SpikeRejectionSetting,
};

pub struct SpikeRejection;
impl Register for SpikeRejection {
    type Repr = SpikeRejectionSetting;

    fn name(&self) -> &'static str {
        "SREJ"
    }

    fn description(&self) -> &'static str {
        "Spike rejection"
    }

    fn address(&self) -> u8 {
        0x02
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(4, 0)
    }

    fn default_value(&self) -> u8 {
        0b_0010
    }
}
