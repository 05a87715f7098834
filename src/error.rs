/// Errors of the [`crate::Sensor`] driver.
///
/// Requests that are out of range are rejected before anything is written to the sensor.
#[derive(Debug, thiserror::Error)]
pub enum Error<BusE, IrqE> {
    /// Platform-dependent transport errors (SPI or GPIO)
    #[error("register transport failed: {0:?}")]
    Interface(BusE),
    /// Attaching or detaching the interrupt callback failed
    #[error("interrupt line failed: {0:?}")]
    Irq(IrqE),
    #[error("requested {what} of {requested} is out of range (max {max})")]
    OutOfRange {
        what: &'static str,
        requested: u32,
        max: u32,
    },
    #[error("a field of {width} bits at bit {start} does not fit in a register")]
    InvalidField { width: u8, start: u8 },
    #[error("register {register} holds {value:#04x}, which is not a valid value")]
    InvalidValue { register: &'static str, value: u8 },
    #[error("register {register} is read only")]
    ReadOnly { register: &'static str },
    #[error("register {register} is a command and can not be read")]
    WriteOnly { register: &'static str },
}

impl<BusE, IrqE> Error<BusE, IrqE> {
    pub(crate) fn out_of_range(
        what: &'static str,
        requested: impl Into<u32>,
        max: impl Into<u32>,
    ) -> Self {
        Self::OutOfRange {
            what,
            requested: requested.into(),
            max: max.into(),
        }
    }

    /// true for errors caused by the arguments of the call rather than the hardware
    pub fn is_rejected_request(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::InvalidField { .. }
                | Self::ReadOnly { .. }
                | Self::WriteOnly { .. }
        )
    }
}
