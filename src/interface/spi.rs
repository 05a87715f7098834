use embedded_hal::spi::{Mode, SpiDevice, MODE_1};

use super::{control_byte, Access, Interface};

/// clock polarity 0, sampled on the falling edge. The sensor shifts out MSB first.
pub const SPI_MODE: Mode = MODE_1;
pub const MAX_FREQUENCY_HZ: u32 = 2_000_000;

/// value clocked out while the sensor answers a read
const DUMMY: u8 = 0xFF;

/// Hardware SPI.
///
/// The [`SpiDevice`] owns chip select and asserts it for exactly one register transaction. It
/// must be configured for [`SPI_MODE`] and at most [`MAX_FREQUENCY_HZ`].
#[derive(Debug)]
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> SpiInterface<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> Interface for SpiInterface<SPI> {
    type Error = SPI::Error;

    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error> {
        let mut buf = [control_byte(Access::Read, address), DUMMY];
        self.spi.transfer_in_place(&mut buf)?;
        trace!("read, addr = {address:#04x}, value = {:#010b}", buf[1]);
        Ok(buf[1])
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        trace!("write, addr = {address:#04x}, value = {value:#010b}");
        self.spi.write(&[control_byte(Access::Write, address), value])
    }
}
