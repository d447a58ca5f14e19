use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Power, TemperatureInterval, ThermodynamicTemperature};

use super::InputError;

/// Errors that can occur while solving the heat balance.
#[derive(Debug, Error)]
pub enum HeatBalanceError {
    /// The pipe input is out of range.
    #[error("invalid input")]
    Input(#[from] InputError),

    /// The configured scan step cannot cover the scan range.
    ///
    /// The step must be positive and finite, and the range may hold at most
    /// a million grid points.
    #[error("scan step must be positive, finite and not too fine for the range: step={step:?}")]
    InvalidScanStep {
        /// The rejected step.
        step: TemperatureInterval,
    },

    /// No neighbouring scan temperatures bracket the balance.
    ///
    /// Either the residual has no root in the scanned range or it is
    /// non-finite there, for example when property tables are extrapolated
    /// into non-physical values.
    #[error("no sign change in scanned range: lower={lower:?}, upper={upper:?}")]
    NoSignChange {
        /// Lowest scanned temperature.
        lower: ThermodynamicTemperature,

        /// Upper end of the scanned range.
        upper: ThermodynamicTemperature,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat flow residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
