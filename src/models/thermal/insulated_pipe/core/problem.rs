//! Problem formulation for the surface temperature search.

use std::convert::Infallible;

use twine_core::EquationProblem;
use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{HeatBalanceSolver, surface::SurfaceBalance};

/// Model adapter exposing the surface temperature as the sole input.
pub(super) struct SurfaceModel<'s, 'a> {
    solver: &'s HeatBalanceSolver<'a>,
}

impl<'s, 'a> SurfaceModel<'s, 'a> {
    pub(super) fn new(solver: &'s HeatBalanceSolver<'a>) -> Self {
        Self { solver }
    }
}

impl Model for SurfaceModel<'_, '_> {
    type Input = ThermodynamicTemperature;
    type Output = SurfaceBalance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.solver.evaluate(input.get::<kelvin>()))
    }
}

/// Equation problem for the heat balance.
///
/// Computes the residual as `outer_heat_flow - inner_heat_flow`.
pub(super) struct BalanceProblem;

impl EquationProblem<1> for BalanceProblem {
    type Input = ThermodynamicTemperature;
    type Output = SurfaceBalance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual()])
    }
}
