use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};

use super::{control_byte, Access, Interface};

/// Software SPI (mode 1, MSB first) over four GPIOs, for boards where the sensor is not wired to
/// a hardware SPI peripheral.
///
/// All pins must share one error type.
pub struct BitBangInterface<CS, CLK, MOSI, MISO, D> {
    cs: CS,
    clk: CLK,
    mosi: MOSI,
    miso: MISO,
    delay: D,
    half_period_ns: u32,
}

impl<CS, CLK, MOSI, MISO, D, E> BitBangInterface<CS, CLK, MOSI, MISO, D>
where
    CS: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    MOSI: OutputPin<Error = E>,
    MISO: InputPin<Error = E>,
    D: DelayNs,
{
    /// `speed_hz` is clamped to the 2MHz the sensor supports
    pub fn new(
        cs: CS,
        clk: CLK,
        mosi: MOSI,
        miso: MISO,
        delay: D,
        speed_hz: u32,
    ) -> Result<Self, E> {
        let speed_hz = speed_hz.clamp(1, super::spi::MAX_FREQUENCY_HZ);
        let mut s = Self {
            cs,
            clk,
            mosi,
            miso,
            delay,
            half_period_ns: 1_000_000_000 / speed_hz / 2,
        };
        s.cs.set_high()?;
        s.clk.set_low()?;
        Ok(s)
    }

    pub fn release(self) -> (CS, CLK, MOSI, MISO, D) {
        (self.cs, self.clk, self.mosi, self.miso, self.delay)
    }

    fn wait(&mut self) {
        self.delay.delay_ns(self.half_period_ns);
    }

    /// assuming cs is low, shift `byte` out while shifting the reply in.
    ///
    /// both sides change data on the rising edge and sample on the falling one.
    fn transfer(&mut self, byte: u8) -> Result<u8, E> {
        let mut reply = 0u8;
        for bit in (0..8).rev() {
            self.clk.set_high()?;
            self.mosi.set_state(PinState::from(byte >> bit & 1 == 1))?;
            self.wait();
            reply = reply << 1 | self.miso.is_high()? as u8;
            self.clk.set_low()?;
            self.wait();
        }
        Ok(reply)
    }

    /// one complete transaction, cs is released even if shifting fails
    fn transaction(&mut self, control: u8, data: u8) -> Result<u8, E> {
        self.cs.set_low()?;
        self.wait();
        let res = self
            .transfer(control)
            .and_then(|_| self.transfer(data));
        self.cs.set_high()?;
        self.wait();
        res
    }
}

impl<CS, CLK, MOSI, MISO, D, E> Interface for BitBangInterface<CS, CLK, MOSI, MISO, D>
where
    CS: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    MOSI: OutputPin<Error = E>,
    MISO: InputPin<Error = E>,
    D: DelayNs,
{
    type Error = E;

    fn read_register(&mut self, address: u8) -> Result<u8, E> {
        let value = self.transaction(control_byte(Access::Read, address), 0xFF)?;
        trace!("read (bitbang), addr = {address:#04x}, value = {value:#010b}");
        Ok(value)
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), E> {
        trace!("write (bitbang), addr = {address:#04x}, value = {value:#010b}");
        self.transaction(control_byte(Access::Write, address), value)?;
        Ok(())
    }
}
