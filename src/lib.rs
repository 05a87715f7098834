//! Driver for the AS3935 franklin lightning sensor.
//!
//! The sensor sits on a 4-wire serial bus ([`interface::SpiInterface`] for a hardware SPI
//! peripheral, [`interface::BitBangInterface`] for plain GPIO) and raises its IRQ pin whenever it
//! has something to report. The IRQ callback only sets a [`PendingEvent`], everything else happens
//! in [`Sensor::state`] and friends, outside the interrupt context.
//!
//! datasheet: <https://www.mouser.com/datasheet/2/588/ams_AS3935_Datasheet_EN_v5-1214568.pdf>

#[macro_use]
extern crate tracing;

pub mod bitfield;
pub mod calibration;
pub mod config;
pub mod error;
pub mod flag;
pub mod interface;
pub mod registers;
pub mod repr;
pub mod sensor;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod state;
pub mod tables;

pub use calibration::CalibrationConstant;
pub use config::Config;
pub use error::Error;
pub use flag::{IrqHandle, PendingEvent};
pub use interface::{Interface, InterruptLine, NoInterrupt};
pub use sensor::Sensor;
pub use state::DeviceState;
