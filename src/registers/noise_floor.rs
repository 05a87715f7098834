use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::NoiseFloorLevel,
};

pub struct NoiseFloor;
impl Register for NoiseFloor {
    type Repr = NoiseFloorLevel;

    fn name(&self) -> &'static str {
        "NF_LEV"
    }

    fn description(&self) -> &'static str {
        "Noise floor level"
    }

    fn address(&self) -> u8 {
        0x01
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(3, 4)
    }

    fn default_value(&self) -> u8 {
        0b010
    }
}
