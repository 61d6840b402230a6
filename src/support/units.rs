//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical units (e.g., length, time, temperature).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Areal energy
//!
//! [`ArealEnergy`] covers energy per unit area, the dimension of a fuel load density:
//!
//! ```
//! use uom::si::{area::square_meter, energy::megajoule, f64::{Area, Energy}};
//! use ibmb_fire::support::units::ArealEnergy;
//!
//! let q: ArealEnergy = Energy::new::<megajoule>(511.0) / Area::new::<square_meter>(1.0);
//! let load: Energy = q * Area::new::<square_meter>(16.0);
//! assert!((load.get::<megajoule>() - 8176.0).abs() < 1e-9);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use ibmb_fire::support::units::TemperatureDifference;
//!
//! let peak = ThermodynamicTemperature::new::<degree_celsius>(980.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let rise = peak.minus(ambient);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::ArealEnergy;
pub use temperature_difference::TemperatureDifference;
