//! Convection correlations for pipe flow and the outer film.
//!
//! - [`ForcedConvection`]: Nusselt correlation `Nu = C·Re^A·Pr^B` for the
//!   liquid inside the pipe.
//! - [`NaturalConvectionRegime`]: piecewise `Nu = C·(Gr·Pr)^A` for the still
//!   air around the insulation.

mod forced;
mod natural;

pub use forced::ForcedConvection;
pub use natural::NaturalConvectionRegime;
