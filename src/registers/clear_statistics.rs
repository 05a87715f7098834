use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::SetClearStatistics,
};

pub struct ClearStatistics;
impl Register for ClearStatistics {
    type Repr = SetClearStatistics;

    fn name(&self) -> &'static str {
        "CL_STAT"
    }

    fn description(&self) -> &'static str {
        "Clear statistics"
    }

    fn address(&self) -> u8 {
        0x02
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(1, 6)
    }

    fn default_value(&self) -> u8 {
        0b1
    }
}
