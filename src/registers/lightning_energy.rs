use crate::{
    bitfield::Field,
    registers::{Mode, Register},
};

/// S_LIG_L, S_LIG_M and S_LIG_MM together form the 21 bit energy of the last strike. The value
/// has no physical unit.
pub struct EnergyLsb;
impl Register for EnergyLsb {
    type Repr = u8;

    fn name(&self) -> &'static str {
        "S_LIG_L"
    }

    fn description(&self) -> &'static str {
        "Energy of the single lightning LSBYTE"
    }

    fn address(&self) -> u8 {
        0x04
    }

    fn mode(&self) -> Mode {
        Mode::Read
    }

    fn field(&self) -> Field {
        Field::BYTE
    }

    fn default_value(&self) -> u8 {
        0x00
    }
}

pub struct EnergyMsb;
impl Register for EnergyMsb {
    type Repr = u8;

    fn name(&self) -> &'static str {
        "S_LIG_M"
    }

    fn description(&self) -> &'static str {
        "Energy of the single lightning MSBYTE"
    }

    fn address(&self) -> u8 {
        0x05
    }

    fn mode(&self) -> Mode {
        Mode::Read
    }

    fn field(&self) -> Field {
        Field::BYTE
    }

    fn default_value(&self) -> u8 {
        0x00
    }
}

pub struct EnergyMmsb;
impl Register for EnergyMmsb {
    type Repr = u8;

    fn name(&self) -> &'static str {
        "S_LIG_MM"
    }

    fn description(&self) -> &'static str {
        "Energy of the single lightning MMSBYTE"
    }

    fn address(&self) -> u8 {
        0x06
    }

    fn mode(&self) -> Mode {
        Mode::Read
    }

    fn field(&self) -> Field {
        Field::new(5, 0)
    }

    fn default_value(&self) -> u8 {
        0b0_0000
    }
}
