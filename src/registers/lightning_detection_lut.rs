use crate::{
    bitfield::Field,
    registers::{Mode, Register},
};

/// First byte of the factory lightning detection look-up table (0x09..=0x32). The chip uses the
/// table internally; the driver only reads this byte to check that a sensor is answering.
pub struct LightningDetectionLut;
impl Register for LightningDetectionLut {
    type Repr = u8;

    fn name(&self) -> &'static str {
        "LDLUT1"
    }

    fn description(&self) -> &'static str {
        "Lightning detection look-up table"
    }

    fn address(&self) -> u8 {
        0x09
    }

    fn mode(&self) -> Mode {
        Mode::Read
    }

    fn field(&self) -> Field {
        Field::BYTE
    }

    fn default_value(&self) -> u8 {
        super::SANITY_CHECK_VALUE
    }
}
