use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::PresetDefaultCmd,
};

pub struct PresetDefault;
impl Register for PresetDefault {
    type Repr = PresetDefaultCmd;

    fn name(&self) -> &'static str {
        "PRESET_DEFAULT"
    }

    fn description(&self) -> &'static str {
        "Sets all registers in default mode"
    }

    fn address(&self) -> u8 {
        0x3c
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
