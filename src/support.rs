//! Building blocks shared by the models.
//!
//! Nothing here knows about a particular model: these are the numerical and
//! physical utilities the models are assembled from.

pub mod constraint;
pub mod convection;
pub mod interpolation;
pub mod properties;
pub mod radiation;
pub mod units;
