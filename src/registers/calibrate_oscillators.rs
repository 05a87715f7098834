use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::CalibrateOscilatorsCmd,
};

pub struct CalibrateOscillators;
impl Register for CalibrateOscillators {
    type Repr = CalibrateOscilatorsCmd;

    fn name(&self) -> &'static str {
        "CALIB_RCO"
    }

    fn description(&self) -> &'static str {
        "Calibrates automatically the internal RC oscillators"
    }

    fn address(&self) -> u8 {
        0x3d
    }

    fn mode(&self) -> Mode {
        Mode::Write
    }

    fn field(&self) -> Field {
        Field::BYTE
    }

    fn default_value(&self) -> u8 {
        0x00
    }
}
