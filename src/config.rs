use serde::{Deserialize, Serialize};

use crate::{
    calibration::CalibrationConstant,
    error::Error,
    interface::{Interface, InterruptLine},
    repr::{
        MinimumLightningThreshold, NoiseFloorLevel, SensorLocation, SignalVerificationThreshold,
        SpikeRejectionSetting,
    },
    sensor::Sensor,
    tables,
};

#[cfg(test)]
mod test;

/// Sensor settings, as kept in a config file. `None` leaves the setting at its preset value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub location: SensorLocation,
    /// lowest table entry at or above this is used
    pub noise_floor_uvrms: Option<u16>,
    pub signal_threshold: Option<u8>,
    pub spike_rejection: Option<u8>,
    /// lowest supported count at or above this is used
    pub strike_threshold: Option<u8>,
    pub mask_disturbers: bool,
    pub calibration: Option<CalibrationConstant>,
}

impl<I, IRQ, BusE, IrqE> Sensor<I, IRQ>
where
    I: Interface<Error = BusE>,
    IRQ: InterruptLine<Error = IrqE>,
{
    /// Applies `config` on top of whatever the sensor holds now.
    ///
    /// Every value is checked before the first write, so a rejected config leaves the sensor
    /// untouched. The calibration constant is applied right away and also stored for the next
    /// [`Sensor::begin`]. It is written before the location, so an explicit location wins over
    /// the AFE gain in the constant.
    pub fn configure(&mut self, config: &Config) -> Result<(), Error<BusE, IrqE>> {
        let noise_floor = config
            .noise_floor_uvrms
            .map(|uvrms| {
                NoiseFloorLevel::ceiling(config.location, uvrms).ok_or_else(|| {
                    let table = tables::noise_floor_table(config.location);
                    Error::out_of_range("noise floor (uVrms)", uvrms, table[table.len() - 1])
                })
            })
            .transpose()?;
        let signal_threshold = config
            .signal_threshold
            .map(|v| {
                SignalVerificationThreshold::new(v).map_err(|_| {
                    Error::out_of_range(
                        SignalVerificationThreshold::WHAT,
                        v,
                        SignalVerificationThreshold::MAX,
                    )
                })
            })
            .transpose()?;
        let spike_rejection = config
            .spike_rejection
            .map(|v| {
                SpikeRejectionSetting::new(v).map_err(|_| {
                    Error::out_of_range(SpikeRejectionSetting::WHAT, v, SpikeRejectionSetting::MAX)
                })
            })
            .transpose()?;
        let strike_threshold = config
            .strike_threshold
            .map(|strikes| {
                MinimumLightningThreshold::ceiling(strikes).ok_or_else(|| {
                    let max = tables::STRIKE_THRESHOLDS[tables::STRIKE_THRESHOLDS.len() - 1];
                    Error::out_of_range("strike threshold", strikes, max)
                })
            })
            .transpose()?;

        if let Some(calibration) = config.calibration {
            self.set_calibration(calibration)?;
            self.set_stored_calibration(Some(calibration));
        }
        self.set_location(config.location)?;
        if let Some((level, _)) = noise_floor {
            self.set_noise_floor_code(level.code())?;
        }
        if let Some(threshold) = signal_threshold {
            self.set_signal_threshold(threshold.value())?;
        }
        if let Some(setting) = spike_rejection {
            self.set_spike_rejection(setting.value())?;
        }
        if let Some(threshold) = strike_threshold {
            self.set_strike_threshold(threshold.count())?;
        }
        self.squelch_disturbers(config.mask_disturbers)?;
        info!("sensor configured: {config:?}");
        Ok(())
    }
}
