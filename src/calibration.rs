//! The calibration constant: the per-board tuning of the sensor, packed into 16 bits so it can
//! be stored and handed back to [`crate::Sensor::with_calibration`] on the next boot.
//!
//! ```text
//!  15 14 13 12 11 10  9  8  7  6  5  4  3  2  1  0
//! +-----------------------------------------------+
//! |  reserved  |  TUN_CAP  | NF_LEV |   AFE_GB     |
//! +-----------------------------------------------+
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    bitfield::{self, Field},
    error::Error,
    interface::{Interface, InterruptLine},
    registers::{self, Register},
    sensor::Sensor,
};

#[cfg(test)]
mod test;

const TUN_CAP: Field = Field::new(4, 8);
const NF_LEV: Field = Field::new(3, 5);
const AFE_GB: Field = Field::new(5, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationConstant(pub u16);

impl CalibrationConstant {
    /// every bit that ends up in a register
    pub const SIGNIFICANT: u16 = 0x0FFF;

    pub fn from_fields(tun_cap: u8, nf_lev: u8, afe_gb: u8) -> Self {
        let mut word = 0;
        word = pack(word, TUN_CAP, tun_cap);
        word = pack(word, NF_LEV, nf_lev);
        word = pack(word, AFE_GB, afe_gb);
        Self(word)
    }

    pub fn tun_cap(&self) -> u8 {
        unpack(self.0, TUN_CAP)
    }

    pub fn nf_lev(&self) -> u8 {
        unpack(self.0, NF_LEV)
    }

    pub fn afe_gb(&self) -> u8 {
        unpack(self.0, AFE_GB)
    }
}

impl From<u16> for CalibrationConstant {
    fn from(word: u16) -> Self {
        Self(word)
    }
}

impl From<CalibrationConstant> for u16 {
    fn from(c: CalibrationConstant) -> u16 {
        c.0
    }
}

fn unpack(word: u16, field: Field) -> u8 {
    bitfield::extract(word, field.width, field.start) as u8
}

fn pack(word: u16, field: Field, value: u8) -> u16 {
    bitfield::insert(word, value as u16, field.width, field.start)
}

impl<I, IRQ, BusE, IrqE> Sensor<I, IRQ>
where
    I: Interface<Error = BusE>,
    IRQ: InterruptLine<Error = IrqE>,
{
    /// Writes TUN_CAP, NF_LEV and AFE_GB. Bits 12-15 are ignored.
    pub fn set_calibration(
        &mut self,
        calibration: CalibrationConstant,
    ) -> Result<(), Error<BusE, IrqE>> {
        debug!("applying calibration constant {:#06x}", calibration.0);
        self.write_field(registers::TuningCapacitors, calibration.tun_cap())?;
        self.write_field(registers::NoiseFloor, calibration.nf_lev())?;
        self.write_field(registers::AfeGainBoost, calibration.afe_gb())?;
        Ok(())
    }

    /// Reads the current tuning back as a calibration constant
    pub fn get_calibration(&mut self) -> Result<CalibrationConstant, Error<BusE, IrqE>> {
        let afe_gb = self.read_field(registers::AfeGainBoost)?;
        let nf_lev = self.read_field(registers::NoiseFloor)?;
        let tun_cap = self.read_field(registers::TuningCapacitors)?;
        Ok(CalibrationConstant::from_fields(tun_cap, nf_lev, afe_gb))
    }

    // raw field access, the calibration fields are not validated against their typed reprs
    fn write_field<R: Register>(
        &mut self,
        register: R,
        value: u8,
    ) -> Result<(), Error<BusE, IrqE>> {
        self.interface_mut()
            .write_partial(register.address(), value, register.field())
            .map_err(Error::Interface)
    }

    fn read_field<R: Register>(&mut self, register: R) -> Result<u8, Error<BusE, IrqE>> {
        self.interface_mut()
            .read_partial(register.address(), register.field())
            .map_err(Error::Interface)
    }
}
