//! Register transport.
//!
//! Every transaction is two bytes framed by chip select: a control byte carrying the access mode
//! in bits 6-7 and the register address in bits 0-5, followed by the data byte.

pub mod bitbang;
pub mod spi;
#[cfg(test)]
mod test;

use std::convert::Infallible;

use crate::{bitfield::Field, flag::IrqHandle};

pub use bitbang::BitBangInterface;
pub use spi::SpiInterface;

/// Access mode, as encoded in the top bits of the control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Access {
    Write = 0b00,
    Read = 0b01,
}

pub const ADDRESS_MASK: u8 = 0x3F;

pub fn control_byte(access: Access, address: u8) -> u8 {
    ((access as u8) << 6) | (address & ADDRESS_MASK)
}

/// Single byte register access to the sensor.
///
/// Implementors only provide whole-register reads and writes. Field access is built on top, and
/// the read-modify-write in [`Interface::write_partial`] is only safe as long as nothing else
/// touches the bus in between, which `&mut self` guarantees.
pub trait Interface {
    type Error;

    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error>;

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    fn read_partial(&mut self, address: u8, field: Field) -> Result<u8, Self::Error> {
        Ok(field.extract(self.read_register(address)?))
    }

    /// read-modify-write of one field. an empty field does nothing (and generates no bus traffic)
    fn write_partial(&mut self, address: u8, value: u8, field: Field) -> Result<(), Self::Error> {
        if field.mask() == 0 {
            return Ok(());
        }
        let old = self.read_register(address)?;
        let new = field.insert(old, value);
        debug!(
            "partial write, addr = {address:#04x}, old = {old:#010b}, new = {new:#010b}, mask = {:#010b}",
            field.mask()
        );
        self.write_register(address, new)
    }
}

/// Edge triggered interrupt input of the sensor.
///
/// `attach` must arrange for [`IrqHandle::signal`] to be called on every rising edge, and must not
/// do anything else from the interrupt context.
pub trait InterruptLine {
    type Error;

    fn attach(&mut self, handle: IrqHandle) -> Result<(), Self::Error>;

    fn detach(&mut self) -> Result<(), Self::Error>;
}

/// For setups that poll [`crate::Sensor::state`] instead of wiring up the IRQ pin
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterrupt;

impl InterruptLine for NoInterrupt {
    type Error = Infallible;

    fn attach(&mut self, _handle: IrqHandle) -> Result<(), Self::Error> {
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
