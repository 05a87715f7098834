use std::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::{
    bitfield::Field,
    calibration::CalibrationConstant,
    error::Error,
    flag::{IrqHandle, PendingEvent},
    interface::{Interface, InterruptLine},
    registers::{self, Register, LAST_ADDRESS, REGISTER_COUNT},
    repr::{
        AfeGain, CalibrateOscilatorsCmd, DistanceEstimate, FrequencyDivisionRatio,
        MaskDisturberEvent, MinimumLightningThreshold, NoiseFloorLevel, Oscillator,
        OutputLCOOnIRQ, OutputSRCOOnIRQ, OutputTRCOOnIRQ, PowerDownStatus, PresetDefaultCmd,
        SensorLocation, SetClearStatistics, SignalVerificationThreshold, SpikeRejectionSetting,
        TuningCapacitorValue,
    },
    tables,
};


/// how long TRCO is routed to the IRQ pin while the oscillators calibrate
pub const CLOCK_GENERATION_DELAY: Duration = Duration::from_millis(2);

/// Driver for one AS3935.
///
/// `I` is the register transport, `IRQ` the interrupt line the sensor's IRQ pin is wired to
/// ([`crate::interface::NoInterrupt`] when polling). All register access goes through `&mut self`,
/// so read-modify-write cycles can not interleave. Share it between threads behind a `Mutex`.
pub struct Sensor<I, IRQ> {
    interface: I,
    irq: IRQ,
    pending: PendingEvent,
    calibration: Option<CalibrationConstant>,
}

impl<I, IRQ, BusE, IrqE> Sensor<I, IRQ>
where
    I: Interface<Error = BusE>,
    IRQ: InterruptLine<Error = IrqE>,
{
    /// Does not touch the sensor, call [`Sensor::begin`] before use.
    pub fn new(interface: I, irq: IRQ) -> Self {
        Self {
            interface,
            irq,
            pending: PendingEvent::new(),
            calibration: None,
        }
    }

    /// Like [`Sensor::new`], with a calibration constant that [`Sensor::begin`] applies after the
    /// preset.
    pub fn with_calibration(interface: I, irq: IRQ, calibration: CalibrationConstant) -> Self {
        Self {
            calibration: Some(calibration),
            ..Self::new(interface, irq)
        }
    }

    pub fn stored_calibration(&self) -> Option<CalibrationConstant> {
        self.calibration
    }

    /// takes effect on the next [`Sensor::begin`]
    pub fn set_stored_calibration(&mut self, calibration: Option<CalibrationConstant>) {
        self.calibration = calibration;
    }

    pub fn interface(&self) -> &I {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Detaches the interrupt callback and hands back the collaborators
    pub fn release(mut self) -> Result<(I, IRQ), Error<BusE, IrqE>> {
        self.irq.detach().map_err(Error::Irq)?;
        Ok((self.interface, self.irq))
    }

    /// Resets the sensor into service.
    ///
    /// Loads the register preset, applies the stored calibration constant (if any), calibrates
    /// the internal oscillators, powers up, and re-attaches the interrupt callback. Needs to be
    /// re-run after the sensor loses power.
    pub fn begin(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<BusE, IrqE>> {
        self.irq.detach().map_err(Error::Irq)?;

        self.write_reg(registers::PresetDefault, PresetDefaultCmd)?;
        if let Some(calibration) = self.calibration {
            self.set_calibration(calibration)?;
        }

        self.calibrate_oscillators(delay)?;
        self.into_service()?;
        info!("lightning sensor initialized");
        Ok(())
    }

    /// Re-runs the oscillator calibration without touching any other setting
    pub fn reset_oscillator_trim(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<BusE, IrqE>> {
        self.irq.detach().map_err(Error::Irq)?;
        self.calibrate_oscillators(delay)?;
        self.into_service()
    }

    /// leaves the sensor powered down
    fn calibrate_oscillators(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<BusE, IrqE>> {
        self.write_reg(registers::PowerDown, PowerDownStatus::Off)?;
        self.write_reg(registers::CalibrateOscillators, CalibrateOscilatorsCmd)?;
        self.write_reg(registers::DisplayTrcoOnIrqPin, OutputTRCOOnIRQ(true))?;
        delay.delay_us(CLOCK_GENERATION_DELAY.as_micros() as u32);
        self.write_reg(registers::DisplayTrcoOnIrqPin, OutputTRCOOnIRQ(false))?;
        Ok(())
    }

    fn into_service(&mut self) -> Result<(), Error<BusE, IrqE>> {
        self.write_reg(registers::PowerDown, PowerDownStatus::On)?;
        self.irq.attach(self.pending.handle()).map_err(Error::Irq)?;
        self.pending.reset();
        Ok(())
    }

    pub fn pending_event(&self) -> &PendingEvent {
        &self.pending
    }

    /// A second producer for the pending-event latch, for platforms that deliver the interrupt
    /// outside of [`InterruptLine`]
    pub fn irq_handle(&self) -> IrqHandle {
        self.pending.handle()
    }

    /// true if the IRQ pin rose since the state was last read
    pub fn available(&self) -> bool {
        self.pending.is_set()
    }

    pub fn clear(&mut self) {
        self.pending.reset();
    }

    pub fn power(&mut self, on: bool) -> Result<(), Error<BusE, IrqE>> {
        let status = if on {
            PowerDownStatus::On
        } else {
            PowerDownStatus::Off
        };
        self.write_reg(registers::PowerDown, status)
    }

    pub fn read_register(&mut self, address: u8) -> Result<u8, Error<BusE, IrqE>> {
        self.interface
            .read_register(address)
            .map_err(Error::Interface)
    }

    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<BusE, IrqE>> {
        self.interface
            .write_register(address, value)
            .map_err(Error::Interface)
    }

    /// A zero width reads as 0 without touching the bus.
    pub fn read_partial(
        &mut self,
        address: u8,
        width: u8,
        start: u8,
    ) -> Result<u8, Error<BusE, IrqE>> {
        if width == 0 {
            return Ok(0);
        }
        let field = Field::checked(width, start).ok_or(Error::InvalidField { width, start })?;
        self.interface
            .read_partial(address, field)
            .map_err(Error::Interface)
    }

    /// Read-modify-write of `width` bits at `start`. High bits of `value` that do not fit are
    /// dropped, and a zero width does nothing.
    pub fn write_partial(
        &mut self,
        address: u8,
        value: u8,
        width: u8,
        start: u8,
    ) -> Result<(), Error<BusE, IrqE>> {
        if width == 0 {
            return Ok(());
        }
        let field = Field::checked(width, start).ok_or(Error::InvalidField { width, start })?;
        self.interface
            .write_partial(address, value, field)
            .map_err(Error::Interface)
    }

    pub fn read_reg<R: Register>(&mut self, register: R) -> Result<R::Repr, Error<BusE, IrqE>>
    where
        R::Repr: TryFrom<u8>,
    {
        if !register.mode().readable() {
            return Err(Error::WriteOnly {
                register: register.name(),
            });
        }
        let value = self
            .interface
            .read_partial(register.address(), register.field())
            .map_err(Error::Interface)?;
        R::Repr::try_from(value).map_err(|_| Error::InvalidValue {
            register: register.name(),
            value,
        })
    }

    pub fn write_reg<R: Register>(
        &mut self,
        register: R,
        payload: R::Repr,
    ) -> Result<(), Error<BusE, IrqE>>
    where
        R::Repr: Into<u8>,
    {
        if !register.mode().writable() {
            return Err(Error::ReadOnly {
                register: register.name(),
            });
        }
        let field = register.field();
        let value: u8 = payload.into();
        if value > field.max() {
            return Err(Error::out_of_range(register.name(), value, field.max()));
        }
        let res = if field.covers_byte() {
            self.interface.write_register(register.address(), value)
        } else {
            self.interface.write_partial(register.address(), value, field)
        };
        res.map_err(Error::Interface)
    }

    /// Raw copy of every readable register, `0x00..=0x32`
    pub fn dump_registers(&mut self) -> Result<[u8; REGISTER_COUNT], Error<BusE, IrqE>> {
        let mut buf = [0u8; REGISTER_COUNT];
        for (address, slot) in (0..=LAST_ADDRESS).zip(buf.iter_mut()) {
            *slot = self.read_register(address)?;
        }
        Ok(buf)
    }

    pub fn set_location(&mut self, location: SensorLocation) -> Result<(), Error<BusE, IrqE>> {
        self.write_reg(registers::AfeGainBoost, AfeGain::from(location))
    }

    pub fn set_indoors(&mut self, indoors: bool) -> Result<(), Error<BusE, IrqE>> {
        self.set_location(if indoors {
            SensorLocation::Indoor
        } else {
            SensorLocation::Outdoor
        })
    }

    pub fn set_custom_gain(&mut self, gain: u8) -> Result<(), Error<BusE, IrqE>> {
        let gain = AfeGain::new(gain).map_err(|_| {
            Error::out_of_range("AFE gain", gain, registers::AfeGainBoost.field().max())
        })?;
        self.write_reg(registers::AfeGainBoost, gain)
    }

    pub fn afe_gain(&mut self) -> Result<AfeGain, Error<BusE, IrqE>> {
        self.read_reg(registers::AfeGainBoost)
    }

    /// Which noise floor table applies, derived from the AFE gain
    pub fn location(&mut self) -> Result<SensorLocation, Error<BusE, IrqE>> {
        Ok(self.afe_gain()?.location())
    }

    pub fn is_indoors(&mut self) -> Result<bool, Error<BusE, IrqE>> {
        Ok(self.location()? == SensorLocation::Indoor)
    }

    /// noise floor threshold in µVrms
    pub fn noise_floor(&mut self) -> Result<u16, Error<BusE, IrqE>> {
        let location = self.location()?;
        Ok(self.read_reg(registers::NoiseFloor)?.uvrms(location))
    }

    /// Selects the lowest noise floor threshold that is at least `uvrms` for the current AFE
    /// setting, and returns the threshold actually selected.
    pub fn set_noise_floor(&mut self, uvrms: u16) -> Result<u16, Error<BusE, IrqE>> {
        let location = self.location()?;
        let table = tables::noise_floor_table(location);
        let (level, actual) = NoiseFloorLevel::ceiling(location, uvrms).ok_or_else(|| {
            Error::out_of_range("noise floor (uVrms)", uvrms, table[table.len() - 1])
        })?;
        debug!(
            "noise floor {uvrms}uVrms -> level {} ({actual}uVrms, {location:?})",
            level.code()
        );
        self.write_reg(registers::NoiseFloor, level)?;
        Ok(actual)
    }

    /// raw NF_LEV code, 0..=7
    pub fn noise_floor_code(&mut self) -> Result<u8, Error<BusE, IrqE>> {
        Ok(self.read_reg(registers::NoiseFloor)?.code())
    }

    pub fn set_noise_floor_code(&mut self, code: u8) -> Result<(), Error<BusE, IrqE>> {
        let level = NoiseFloorLevel::new(code).map_err(|_| {
            Error::out_of_range("noise floor level", code, registers::NoiseFloor.field().max())
        })?;
        self.write_reg(registers::NoiseFloor, level)
    }

    /// Stops disturber events from raising interrupts
    pub fn squelch_disturbers(&mut self, squelch: bool) -> Result<(), Error<BusE, IrqE>> {
        self.write_reg(registers::MaskDisturber, MaskDisturberEvent(squelch))
    }

    pub fn disturbers_squelched(&mut self) -> Result<bool, Error<BusE, IrqE>> {
        Ok(self.read_reg(registers::MaskDisturber)?.0)
    }

    pub fn signal_threshold(&mut self) -> Result<u8, Error<BusE, IrqE>> {
        Ok(self.read_reg(registers::WatchdogThreshold)?.value())
    }

    pub fn set_signal_threshold(&mut self, threshold: u8) -> Result<(), Error<BusE, IrqE>> {
        let threshold = SignalVerificationThreshold::new(threshold).map_err(|_| {
            Error::out_of_range(
                SignalVerificationThreshold::WHAT,
                threshold,
                SignalVerificationThreshold::MAX,
            )
        })?;
        self.write_reg(registers::WatchdogThreshold, threshold)
    }

    pub fn spike_rejection(&mut self) -> Result<u8, Error<BusE, IrqE>> {
        Ok(self.read_reg(registers::SpikeRejection)?.value())
    }

    pub fn set_spike_rejection(&mut self, setting: u8) -> Result<(), Error<BusE, IrqE>> {
        let setting = SpikeRejectionSetting::new(setting).map_err(|_| {
            Error::out_of_range(
                SpikeRejectionSetting::WHAT,
                setting,
                SpikeRejectionSetting::MAX,
            )
        })?;
        self.write_reg(registers::SpikeRejection, setting)
    }

    /// minimum number of strikes before lightning is reported
    pub fn strike_threshold(&mut self) -> Result<u8, Error<BusE, IrqE>> {
        Ok(self.read_reg(registers::MinimumNumberOfLightning)?.count())
    }

    /// Selects the lowest strike threshold that is at least `strikes`, and returns the threshold
    /// actually selected.
    pub fn set_strike_threshold(&mut self, strikes: u8) -> Result<u8, Error<BusE, IrqE>> {
        let threshold = MinimumLightningThreshold::ceiling(strikes).ok_or_else(|| {
            Error::out_of_range(
                "strike threshold",
                strikes,
                tables::STRIKE_THRESHOLDS[tables::STRIKE_THRESHOLDS.len() - 1],
            )
        })?;
        debug!("strike threshold {strikes} -> {threshold:?}");
        self.write_reg(registers::MinimumNumberOfLightning, threshold)?;
        Ok(threshold.count())
    }

    pub fn storm_distance(&mut self) -> Result<DistanceEstimate, Error<BusE, IrqE>> {
        self.read_reg(registers::DistanceEstimation)
    }

    /// Energy of the last strike (21 bits, no physical unit)
    pub fn lightning_energy(&mut self) -> Result<u32, Error<BusE, IrqE>> {
        let lsb = self.read_reg(registers::EnergyLsb)? as u32;
        let msb = self.read_reg(registers::EnergyMsb)? as u32;
        let mmsb = self.read_reg(registers::EnergyMmsb)? as u32;
        Ok((mmsb << 16) | (msb << 8) | lsb)
    }

    /// Clears the strike statistics the distance estimation is based on
    pub fn clear_statistics(&mut self) -> Result<(), Error<BusE, IrqE>> {
        for state in [true, false, true] {
            self.write_reg(registers::ClearStatistics, SetClearStatistics(state))?;
        }
        Ok(())
    }

    pub fn tuning_capacitors(&mut self) -> Result<TuningCapacitorValue, Error<BusE, IrqE>> {
        self.read_reg(registers::TuningCapacitors)
    }

    pub fn tuning_capacitance_pf(&mut self) -> Result<u16, Error<BusE, IrqE>> {
        Ok(self.tuning_capacitors()?.picofarads())
    }

    pub fn set_tuning_capacitors(&mut self, value: u8) -> Result<(), Error<BusE, IrqE>> {
        let value = TuningCapacitorValue::new(value).map_err(|_| {
            Error::out_of_range(TuningCapacitorValue::WHAT, value, TuningCapacitorValue::MAX)
        })?;
        self.write_reg(registers::TuningCapacitors, value)
    }

    pub fn lco_division(&mut self) -> Result<FrequencyDivisionRatio, Error<BusE, IrqE>> {
        self.read_reg(registers::FrequencyDivisionRatioForAntennaTuning)
    }

    pub fn set_lco_division(
        &mut self,
        ratio: FrequencyDivisionRatio,
    ) -> Result<(), Error<BusE, IrqE>> {
        self.write_reg(registers::FrequencyDivisionRatioForAntennaTuning, ratio)
    }

    /// Routes one of the internal oscillators to the IRQ pin, for antenna tuning and clock checks.
    ///
    /// While an oscillator is displayed the IRQ pin toggles continuously, so the pending-event
    /// latch means nothing until it is switched off again.
    pub fn display_oscillator(
        &mut self,
        oscillator: Oscillator,
        on: bool,
    ) -> Result<(), Error<BusE, IrqE>> {
        match oscillator {
            Oscillator::Lco => self.write_reg(registers::DisplayLcoOnIrqPin, OutputLCOOnIRQ(on)),
            Oscillator::Srco => self.write_reg(registers::DisplaySrcoOnIrqPin, OutputSRCOOnIRQ(on)),
            Oscillator::Trco => self.write_reg(registers::DisplayTrcoOnIrqPin, OutputTRCOOnIRQ(on)),
        }
    }
}
