//! A software model of the sensor, for running the driver without hardware.
//!
//! [`SimulatedChip`] holds the register file and implements [`Interface`], [`SimulatedIrq`] is
//! its IRQ pin. Both are cheap handles to the same state, so a test (or a thread standing in for
//! the weather) can keep one while the driver owns the other.

use std::{
    convert::Infallible,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread,
    time::Duration,
};

use embedded_hal::delay::DelayNs;

use crate::{
    flag::IrqHandle,
    interface::{InterruptLine, ADDRESS_MASK},
    registers::{self, Register, PRESET, SANITY_CHECK_VALUE},
    repr::{IrqReason, DIRECT_COMMAND},
    Interface,
};

const INT: u8 = 0x03;
const INT_MASK: u8 = 0b0000_1111;
const PWD_MASK: u8 = 0b0000_0001;

#[derive(Debug)]
struct Chip {
    registers: [u8; 64],
    /// every `(address, value)` written through the bus, in order
    writes: Vec<(u8, u8)>,
    irq: Option<IrqHandle>,
    oscillators_calibrated: bool,
}

impl Chip {
    fn preset(&mut self) {
        for (address, value) in PRESET {
            self.registers[address as usize] = value;
        }
    }

    fn powered(&self) -> bool {
        self.registers[0x00] & PWD_MASK == 0
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedChip(Arc<Mutex<Chip>>);

impl SimulatedChip {
    /// A freshly powered chip
    pub fn new() -> Self {
        let mut chip = Chip {
            registers: [0; 64],
            writes: vec![],
            irq: None,
            oscillators_calibrated: false,
        };
        chip.preset();
        // the rest of the look-up table is not modeled
        chip.registers[registers::LightningDetectionLut.address() as usize] = SANITY_CHECK_VALUE;
        Self(Arc::new(Mutex::new(chip)))
    }

    fn chip(&self) -> MutexGuard<'_, Chip> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn irq_line(&self) -> SimulatedIrq {
        SimulatedIrq(self.0.clone())
    }

    /// register contents, without going through the bus
    pub fn peek(&self, address: u8) -> u8 {
        self.chip().registers[(address & ADDRESS_MASK) as usize]
    }

    /// sets a register behind the driver's back (not logged, read-only registers included)
    pub fn poke(&self, address: u8, value: u8) {
        self.chip().registers[(address & ADDRESS_MASK) as usize] = value;
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.chip().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.chip().writes.clear();
    }

    pub fn oscillators_calibrated(&self) -> bool {
        self.chip().oscillators_calibrated
    }

    /// Latches `reason` into INT and pulses the IRQ pin, if the chip is powered and a callback is
    /// attached.
    pub fn raise(&self, reason: IrqReason) {
        let mut chip = self.chip();
        let int = chip.registers[INT as usize];
        chip.registers[INT as usize] = (int & !INT_MASK) | (reason.bits() & INT_MASK);
        if chip.powered() {
            if let Some(irq) = &chip.irq {
                irq.signal();
            }
        }
    }

    /// A strike `distance` (raw distance register) away with the given 21 bit energy
    pub fn strike(&self, distance: u8, energy: u32) {
        {
            let mut chip = self.chip();
            chip.registers[0x04] = energy as u8;
            chip.registers[0x05] = (energy >> 8) as u8;
            chip.registers[0x06] = (energy >> 16) as u8 & 0b1_1111;
            chip.registers[0x07] = distance;
        }
        self.raise(IrqReason::LIGHTNING);
    }
}

impl Default for SimulatedChip {
    fn default() -> Self {
        Self::new()
    }
}

impl Interface for SimulatedChip {
    type Error = Infallible;

    fn read_register(&mut self, address: u8) -> Result<u8, Infallible> {
        let address = address & ADDRESS_MASK;
        let mut chip = self.chip();
        let value = chip.registers[address as usize];
        if address == INT {
            // the reason is cleared once read
            chip.registers[INT as usize] &= !INT_MASK;
        }
        Ok(value)
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Infallible> {
        let address = address & ADDRESS_MASK;
        let mut chip = self.chip();
        chip.writes.push((address, value));
        match address {
            0x3C if value == DIRECT_COMMAND => chip.preset(),
            0x3D if value == DIRECT_COMMAND => chip.oscillators_calibrated = true,
            INT => {
                let int = chip.registers[INT as usize];
                chip.registers[INT as usize] = (value & !INT_MASK) | (int & INT_MASK);
            }
            // measurement results and the look-up table are read only
            0x04..=0x07 | 0x09..=0x32 => {}
            0x00..=0x08 => chip.registers[address as usize] = value,
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedIrq(Arc<Mutex<Chip>>);

impl SimulatedIrq {
    pub fn attached(&self) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .irq
            .is_some()
    }
}

impl InterruptLine for SimulatedIrq {
    type Error = Infallible;

    fn attach(&mut self, handle: IrqHandle) -> Result<(), Infallible> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).irq = Some(handle);
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Infallible> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).irq = None;
        Ok(())
    }
}

/// [`DelayNs`] backed by `thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns as u64));
    }
}
