//! Register map of the AS3935.
//!
//! Every field the driver touches has a unit struct implementing [`Register`], which ties the
//! location of the field to the type used to represent it.

mod afe_gain_boost;
mod calibrate_oscillators;
mod clear_statistics;
mod display_lco_on_irq_pin;
mod display_srco_on_irq_pin;
mod display_trco_on_irq_pin;
mod distance_estimation;
mod frequency_division_ratio_for_antenna_tuning;
mod interrupt;
mod lightning_detection_lut;
mod lightning_energy;
mod mask_disturber;
mod minimum_number_of_lightning;
mod noise_floor;
mod power_down;
mod preset_default;
mod spike_rejection;
mod tuning_capacitors;
mod watchdog_threshold;

pub use afe_gain_boost::AfeGainBoost;
pub use calibrate_oscillators::CalibrateOscillators;
pub use clear_statistics::ClearStatistics;
pub use display_lco_on_irq_pin::DisplayLcoOnIrqPin;
pub use display_srco_on_irq_pin::DisplaySrcoOnIrqPin;
pub use display_trco_on_irq_pin::DisplayTrcoOnIrqPin;
pub use distance_estimation::DistanceEstimation;
pub use frequency_division_ratio_for_antenna_tuning::FrequencyDivisionRatioForAntennaTuning;
pub use interrupt::Interrupt;
pub use lightning_detection_lut::LightningDetectionLut;
pub use lightning_energy::{EnergyLsb, EnergyMmsb, EnergyMsb};
pub use mask_disturber::MaskDisturber;
pub use minimum_number_of_lightning::MinimumNumberOfLightning;
pub use noise_floor::NoiseFloor;
pub use power_down::PowerDown;
pub use preset_default::PresetDefault;
pub use spike_rejection::SpikeRejection;
pub use tuning_capacitors::TuningCapacitors;
pub use watchdog_threshold::WatchdogThreshold;

use crate::bitfield::Field;

/// Factory value of [`LightningDetectionLut`]. Anything else means there is no working sensor on
/// the other end of the bus.
pub const SANITY_CHECK_VALUE: u8 = 0xAD;

/// highest readable address, the end of the look-up table
pub const LAST_ADDRESS: u8 = 0x32;
pub const REGISTER_COUNT: usize = LAST_ADDRESS as usize + 1;

/// Configuration registers after `PRESET_DEFAULT`, as `(address, value)`
pub const PRESET: [(u8, u8); 9] = [
    (0x00, 0b0010_0100),
    (0x01, 0b0010_0010),
    (0x02, 0b1100_0010),
    (0x03, 0b0000_0000),
    (0x04, 0x00),
    (0x05, 0x00),
    (0x06, 0x00),
    (0x07, 0b0011_1111),
    (0x08, 0b0000_0000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    ReadWrite,
    /// direct commands, reading them is meaningless
    Write,
}

impl Mode {
    pub fn readable(&self) -> bool {
        !matches!(self, Mode::Write)
    }

    pub fn writable(&self) -> bool {
        !matches!(self, Mode::Read)
    }
}

pub trait Register {
    type Repr;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn address(&self) -> u8;

    fn mode(&self) -> Mode;

    fn field(&self) -> Field;

    /// value of the field after `PRESET_DEFAULT`
    fn default_value(&self) -> u8;
}
