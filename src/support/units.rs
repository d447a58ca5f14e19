//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units at its public boundary.
//! This module provides quantities that the heat balance needs but that are
//! not named in [`uom::si::f64`].
//!
//! Neither quantity has units attached, so values are built by combining
//! quantities that do and are read back through `value`, which is always in
//! SI base units:
//!
//! ```
//! use twine_insulation::support::units::ThermalResistance;
//! use uom::si::{
//!     f64::{Power, TemperatureInterval},
//!     power::watt,
//!     temperature_interval::kelvin,
//! };
//!
//! let r: ThermalResistance =
//!     TemperatureInterval::new::<kelvin>(0.89) / Power::new::<watt>(1.0);
//! assert!((r.value - 0.89).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{KinematicViscosity, ThermalResistance};
pub(crate) use quantities::{kinematic_viscosity, thermal_resistance};
