use crate::{
    error::Error,
    interface::{Interface, InterruptLine},
    registers::{self, SANITY_CHECK_VALUE},
    repr::{IrqReason, PowerDownStatus},
    sensor::Sensor,
};

#[cfg(test)]
mod test;

/// What the sensor is doing, as far as one look at its registers can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    /// The sanity check register did not read back its factory value. Check wiring and power,
    /// then [`Sensor::begin`] again.
    Unknown,
    PowerDown,
    Listening,
    Noisy,
    Lightning,
    Disturber,
    /// An interrupt reason with none of the known bits set, holds the raw INT field
    UnrecognizedIrq(u8),
}

impl DeviceState {
    /// Picks the state for a non-empty interrupt reason. Lightning wins over a disturber, which
    /// wins over noise.
    pub fn from_irq(reason: IrqReason) -> Self {
        if reason.contains(IrqReason::LIGHTNING) {
            Self::Lightning
        } else if reason.contains(IrqReason::DISTURBER) {
            Self::Disturber
        } else if reason.contains(IrqReason::NOISE_HIGH) {
            Self::Noisy
        } else {
            Self::UnrecognizedIrq(reason.bits())
        }
    }
}

impl<I, IRQ, BusE, IrqE> Sensor<I, IRQ>
where
    I: Interface<Error = BusE>,
    IRQ: InterruptLine<Error = IrqE>,
{
    /// Works out the current state.
    ///
    /// Reading the interrupt reason clears it on the chip, and this also clears the pending-event
    /// latch, whatever the result. Nothing is cached: every call goes back to the registers.
    pub fn state(&mut self) -> Result<DeviceState, Error<BusE, IrqE>> {
        let check = self.read_reg(registers::LightningDetectionLut)?;
        if check != SANITY_CHECK_VALUE {
            warn!("sanity check failed: read {check:#04x}, expected {SANITY_CHECK_VALUE:#04x}");
            return Ok(DeviceState::Unknown);
        }

        let reason = self.read_reg(registers::Interrupt)?;
        self.clear();

        let state = if reason.is_empty() {
            match self.read_reg(registers::PowerDown)? {
                PowerDownStatus::Off => DeviceState::PowerDown,
                PowerDownStatus::On => DeviceState::Listening,
            }
        } else {
            DeviceState::from_irq(reason)
        };
        if let DeviceState::UnrecognizedIrq(bits) = state {
            warn!("unrecognized interrupt reason {bits:#06b}");
        }
        debug!("state = {state:?} (irq reason {reason:?})");
        Ok(state)
    }
}
