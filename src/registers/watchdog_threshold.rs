use crate::{
    bitfield::Field,
    registers::{Mode, Register},
    repr::SignalVerificationThreshold,
};

pub struct WatchdogThreshold;
impl Register for WatchdogThreshold {
    type Repr = SignalVerificationThreshold;

    fn name(&self) -> &'static str {
        "WDTH"
    }

    fn description(&self) -> &'static str {
        "Watchdog threshold"
    }

    fn address(&self) -> u8 {
        0x01
    }

    fn mode(&self) -> Mode {
        Mode::ReadWrite
    }

    fn field(&self) -> Field {
        Field::new(4, 0)
    }

    fn default_value(&self) -> u8 {
        0b0010
    }
}
