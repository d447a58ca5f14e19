//! Tabulated fluid transport properties.
//!
//! A [`PropertyTable`] holds temperature-sorted samples of thermal
//! conductivity, kinematic viscosity and Prandtl number for one fluid and
//! evaluates them at arbitrary temperatures by Lagrange interpolation over the
//! full sample set.
//!
//! Tables are immutable once built and can be shared by reference between any
//! number of solvers.
//!
//! # Sources
//!
//! - [`PropertyTable::from_rows`] takes numeric rows in SI units.
//! - [`str::parse`] reads the tab-separated text format: a header line
//!   followed by one `temperature  conductivity  viscosity  prandtl` row per
//!   line, with either `.` or `,` as the decimal separator.
//! - [`PropertyTable::air`] and [`PropertyTable::water`] are built in.
//!
//! Malformed sources are rejected with a [`DataError`]; no table is produced.

mod builtin;
mod error;
mod parse;
mod table;

pub use error::DataError;
pub use table::{Property, PropertyTable};
