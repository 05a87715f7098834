//! Typed values of the register fields.
//!
//! Decoding goes through `TryFrom<u8>` and fails with [`InvalidRepr`] for codes the field can not
//! hold, encoding through `Into<u8>`. Read-only fields (interrupt reason, distance) and direct
//! commands only implement the direction that makes sense.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::tables;

/// a raw field value with no typed equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRepr(pub u8);

/// written to a direct command register to trigger it
pub const DIRECT_COMMAND: u8 = 0x96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SensorLocation {
    #[default]
    Indoor,
    Outdoor,
}

/// AFE gain boost (AFE_GB), 5 bits.
///
/// The datasheet only defines the indoor and outdoor presets, anything else is a custom gain.
/// Gains at or above the indoor preset use the indoor noise floor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AfeGain(u8);

impl AfeGain {
    pub const INDOOR: AfeGain = AfeGain(0b1_0010);
    pub const OUTDOOR: AfeGain = AfeGain(0b0_1110);

    pub fn new(value: u8) -> Result<Self, InvalidRepr> {
        if value > 0b1_1111 {
            return Err(InvalidRepr(value));
        }
        Ok(Self(value))
    }

    pub fn location(&self) -> SensorLocation {
        if self.0 >= Self::INDOOR.0 {
            SensorLocation::Indoor
        } else {
            SensorLocation::Outdoor
        }
    }
}

impl From<SensorLocation> for AfeGain {
    fn from(location: SensorLocation) -> Self {
        match location {
            SensorLocation::Indoor => Self::INDOOR,
            SensorLocation::Outdoor => Self::OUTDOOR,
        }
    }
}

impl TryFrom<u8> for AfeGain {
    type Error = InvalidRepr;
    fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
        Self::new(byte)
    }
}

impl From<AfeGain> for u8 {
    fn from(gain: AfeGain) -> u8 {
        gain.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerDownStatus {
    /// running
    On,
    /// off
    Off,
}

impl TryFrom<u8> for PowerDownStatus {
    type Error = InvalidRepr;
    fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
        match byte {
            0b0 => Ok(Self::On),
            0b1 => Ok(Self::Off),
            other => Err(InvalidRepr(other)),
        }
    }
}

impl From<PowerDownStatus> for u8 {
    fn from(status: PowerDownStatus) -> u8 {
        match status {
            PowerDownStatus::Off => 0b1,
            PowerDownStatus::On => 0b0,
        }
    }
}

/// Noise floor level code (NF_LEV). What it means in µVrms depends on the AFE setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoiseFloorLevel(u8);

impl NoiseFloorLevel {
    pub fn new(code: u8) -> Result<Self, InvalidRepr> {
        if code > 0b111 {
            return Err(InvalidRepr(code));
        }
        Ok(Self(code))
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    pub fn uvrms(&self, location: SensorLocation) -> u16 {
        tables::noise_floor_table(location)[self.0 as usize]
    }

    /// smallest level that is at least `uvrms`, together with its actual µVrms value
    pub fn ceiling(location: SensorLocation, uvrms: u16) -> Option<(Self, u16)> {
        tables::ceiling(tables::noise_floor_table(location), uvrms)
            .map(|(code, value)| (Self(code as u8), value))
    }
}

impl TryFrom<u8> for NoiseFloorLevel {
    type Error = InvalidRepr;
    fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
        Self::new(byte)
    }
}

impl From<NoiseFloorLevel> for u8 {
    fn from(level: NoiseFloorLevel) -> u8 {
        level.0
    }
}

/// declares a 4 bit setting
macro_rules! nibble_repr {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u8);

        impl $name {
            pub const MAX: u8 = 0b1111;
            pub const WHAT: &'static str = $what;

            pub fn new(value: u8) -> Result<Self, InvalidRepr> {
                if value > Self::MAX {
                    return Err(InvalidRepr(value));
                }
                Ok(Self(value))
            }

            pub fn value(&self) -> u8 {
                self.0
            }
        }

        impl TryFrom<u8> for $name {
            type Error = InvalidRepr;
            fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
                Self::new(byte)
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v.0
            }
        }
    };
}

nibble_repr!(
    /// Watchdog threshold (WDTH). Larger values correspond to more robust disturber rejection,
    /// with a decrease of the detection efficiency. Defaults to 2.
    SignalVerificationThreshold,
    "signal verification threshold"
);

nibble_repr!(
    /// Spike rejection (SREJ). Increases rejection of events that are likely man-made and not
    /// lightning. Defaults to 2.
    SpikeRejectionSetting,
    "spike rejection"
);

nibble_repr!(
    /// Internal tuning capacitors (TUN_CAP), in steps of 8pF
    TuningCapacitorValue,
    "tuning capacitor"
);

impl TuningCapacitorValue {
    pub fn picofarads(&self) -> u16 {
        self.0 as u16 * 8
    }
}

/// Number of strikes within 15 minutes before lightning interrupts are raised (MIN_NUM_LIGH)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MinimumLightningThreshold {
    One,
    Five,
    Nine,
    Sixteen,
}

impl MinimumLightningThreshold {
    const ALL: [MinimumLightningThreshold; 4] = [Self::One, Self::Five, Self::Nine, Self::Sixteen];

    pub fn count(&self) -> u8 {
        tables::STRIKE_THRESHOLDS[u8::from(*self) as usize]
    }

    /// smallest threshold that requires at least `strikes`
    pub fn ceiling(strikes: u8) -> Option<Self> {
        tables::ceiling(&tables::STRIKE_THRESHOLDS, strikes).map(|(code, _)| Self::ALL[code])
    }
}

impl TryFrom<u8> for MinimumLightningThreshold {
    type Error = InvalidRepr;
    fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
        match byte {
            0b00 => Ok(Self::One),
            0b01 => Ok(Self::Five),
            0b10 => Ok(Self::Nine),
            0b11 => Ok(Self::Sixteen),
            other => Err(InvalidRepr(other)),
        }
    }
}

impl From<MinimumLightningThreshold> for u8 {
    fn from(threshold: MinimumLightningThreshold) -> u8 {
        match threshold {
            MinimumLightningThreshold::One => 0b00,
            MinimumLightningThreshold::Five => 0b01,
            MinimumLightningThreshold::Nine => 0b10,
            MinimumLightningThreshold::Sixteen => 0b11,
        }
    }
}

/// Division ratio of the antenna LC oscillator when it is routed to the IRQ pin (LCO_FDIV)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyDivisionRatio {
    R16,
    R32,
    R64,
    R128,
}

impl FrequencyDivisionRatio {
    pub fn divisor(&self) -> u8 {
        16 << u8::from(*self)
    }
}

impl TryFrom<u8> for FrequencyDivisionRatio {
    type Error = InvalidRepr;
    fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
        match byte {
            0b00 => Ok(Self::R16),
            0b01 => Ok(Self::R32),
            0b10 => Ok(Self::R64),
            0b11 => Ok(Self::R128),
            other => Err(InvalidRepr(other)),
        }
    }
}

impl From<FrequencyDivisionRatio> for u8 {
    fn from(ratio: FrequencyDivisionRatio) -> u8 {
        match ratio {
            FrequencyDivisionRatio::R16 => 0b00,
            FrequencyDivisionRatio::R32 => 0b01,
            FrequencyDivisionRatio::R64 => 0b10,
            FrequencyDivisionRatio::R128 => 0b11,
        }
    }
}

/// declares a single bit setting
macro_rules! bit_repr {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub bool);

        impl TryFrom<u8> for $name {
            type Error = InvalidRepr;
            fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
                match byte {
                    0b0 => Ok(Self(false)),
                    0b1 => Ok(Self(true)),
                    other => Err(InvalidRepr(other)),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v.0 as u8
            }
        }
    };
}

bit_repr!(
    /// disable disturber events
    MaskDisturberEvent
);
bit_repr!(
    /// output TRCO clock signal on the IRQ pin
    OutputTRCOOnIRQ
);
bit_repr!(
    /// output SRCO clock signal on the IRQ pin
    OutputSRCOOnIRQ
);
bit_repr!(
    /// output LCO clock signal on the IRQ pin
    OutputLCOOnIRQ
);
bit_repr!(
    /// toggling high-low-high clears the lightning statistics
    SetClearStatistics
);

/// The internal oscillators that can be routed to the IRQ pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Oscillator {
    /// antenna LC oscillator (divided by LCO_FDIV)
    Lco,
    /// 32.768kHz sleep oscillator
    Srco,
    /// 1.1MHz high frequency oscillator
    Trco,
}

bitflags! {
    /// Interrupt reason (INT). Reading it clears it on the chip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IrqReason: u8 {
        const NOISE_HIGH = 0b0001;
        const DISTURBER = 0b0100;
        const LIGHTNING = 0b1000;
    }
}

impl TryFrom<u8> for IrqReason {
    type Error = InvalidRepr;
    fn try_from(byte: u8) -> Result<Self, InvalidRepr> {
        if byte > 0b1111 {
            return Err(InvalidRepr(byte));
        }
        // unknown bits are kept so they can be reported
        Ok(Self::from_bits_retain(byte))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceEstimate {
    /// storm is overhead
    Overhead,
    /// distance to the head of the storm, in km
    InRange(u8),
    /// no storm, or a value the chip does not define
    OutOfRange,
}

impl DistanceEstimate {
    /// `Some(0)` when the storm is overhead
    pub fn kilometers(&self) -> Option<u8> {
        match self {
            Self::Overhead => Some(0),
            Self::InRange(km) => Some(*km),
            Self::OutOfRange => None,
        }
    }
}

impl From<u8> for DistanceEstimate {
    fn from(byte: u8) -> Self {
        tables::storm_distance(byte)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetDefaultCmd;

impl From<PresetDefaultCmd> for u8 {
    fn from(_: PresetDefaultCmd) -> u8 {
        DIRECT_COMMAND
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalibrateOscilatorsCmd;

impl From<CalibrateOscilatorsCmd> for u8 {
    fn from(_: CalibrateOscilatorsCmd) -> u8 {
        DIRECT_COMMAND
    }
}
