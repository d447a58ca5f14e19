//! Insulated pipe heat balance.
//!
//! This module provides a [`twine_core::Model`] implementation for the
//! steady-state heat loss of an insulated pipe carrying a hot liquid.
//! The computational core is in the internal `core` module; its solver and
//! input types are re-exported here for direct use.

mod core;

pub use self::core::{
    HeatBalanceConfig, HeatBalanceError, HeatBalanceSolver, InputError, PipeInput,
    ProblemParameters, Results,
};

use twine_core::Model;

use crate::support::properties::PropertyTable;

/// Insulated pipe model for a given liquid.
///
/// Each call validates the [`PipeInput`], solves the heat balance against
/// the built-in air table, and returns the converged [`Results`].
#[derive(Debug, Clone)]
pub struct InsulatedPipe {
    liquid: PropertyTable,
    config: HeatBalanceConfig,
}

impl InsulatedPipe {
    /// Creates a model for a pipe carrying the liquid described by `liquid`.
    #[must_use]
    pub fn new(liquid: PropertyTable) -> Self {
        Self {
            liquid,
            config: HeatBalanceConfig::default(),
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(self, config: HeatBalanceConfig) -> Self {
        Self { config, ..self }
    }

    /// Returns the liquid property table.
    #[must_use]
    pub fn liquid(&self) -> &PropertyTable {
        &self.liquid
    }
}

impl Model for InsulatedPipe {
    type Input = PipeInput;
    type Output = Results;
    type Error = HeatBalanceError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let params = ProblemParameters::new(*input)?;
        HeatBalanceSolver::with_config(params, &self.liquid, PropertyTable::air(), self.config)
            .solve()
    }
}
