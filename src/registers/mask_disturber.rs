use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::MaskDisturberEvent,
};

pub struct MaskDisturber;
impl Register for MaskDisturber {
    type Repr = MaskDisturberEvent;

    fn name(&self) -> &'static str {
        "MASK_DIST"
    }

    fn description(&self) -> &'static str {
        "Mask disturber"
    }

    fn address(&self) -> u8 {
        0x03
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
