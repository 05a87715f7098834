use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::TuningCapacitorValue,
};

pub struct TuningCapacitors;
impl Register for TuningCapacitors {
    type Repr = TuningCapacitorValue;

    fn name(&self) -> &'static str {
        "TUN_CAP"
    }

    fn description(&self) -> &'static str {
        "Internal tuning capacitors (from 0 to 120pF in steps of 8pF)"
    }

    fn address(&self) -> u8 {
        0x08
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(4, 0)
    }

    fn default_value(&self) -> u8 {
        0b_0000
    }
}
