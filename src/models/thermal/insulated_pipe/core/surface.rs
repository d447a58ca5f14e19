use std::f64::consts::PI;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    convection::NaturalConvectionRegime, properties::Property, radiation::STEFAN_BOLTZMANN,
};

use super::{HeatBalanceSolver, arithmetic::safe_quotient};

/// Standard gravitational acceleration, m/s².
const GRAVITY: f64 = 9.806_65;

/// Heat flows at one candidate insulation surface temperature.
///
/// All values are in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SurfaceBalance {
    pub(super) surface_temperature: f64,
    pub(super) inner_heat_flow: f64,
    pub(super) radiation_coefficient: f64,
    pub(super) convection_coefficient: f64,
    pub(super) grashof: f64,
    pub(super) regime: NaturalConvectionRegime,
    pub(super) convection_heat_flow: f64,
    pub(super) radiation_heat_flow: f64,
    pub(super) outer_heat_flow: f64,
}

impl SurfaceBalance {
    /// Heat leaving the surface minus heat arriving from the liquid.
    pub(super) fn residual(&self) -> f64 {
        self.outer_heat_flow - self.inner_heat_flow
    }
}

impl HeatBalanceSolver<'_> {
    /// Evaluates both sides of the balance at surface temperature `t` (K).
    pub(super) fn evaluate(&self, t: f64) -> SurfaceBalance {
        let input = self.params.input();
        let t_liquid = input.liquid_temperature.get::<kelvin>();
        let t_env = input.environment_temperature.get::<kelvin>();
        let d_z = self.params.overall_diameter_m();
        let delta_t = t - t_env;

        let inner_heat_flow = safe_quotient(t_liquid - t, self.initial.total_resistance());

        let emission = self.guard.powf(t / 100.0, 4.0) - self.guard.powf(t_env / 100.0, 4.0);
        let radiation_coefficient = safe_quotient(
            self.params.radiant_ratio_value() * STEFAN_BOLTZMANN * emission,
            delta_t,
        );

        let film = ThermodynamicTemperature::new::<kelvin>(0.5 * (t + t_env));
        let k = self.air.value_at(film, Property::Conductivity);
        let nu = self.air.value_at(film, Property::KinematicViscosity);
        let pr = self.air.value_at(film, Property::Prandtl);

        let beta = 2.0 / (t + t_env);
        let grashof = safe_quotient(
            GRAVITY * beta * delta_t * self.guard.powf(d_z, 3.0),
            self.guard.powf(nu, 2.0),
        );
        let rayleigh = grashof * pr;
        let regime = NaturalConvectionRegime::classify(rayleigh);
        let convection_coefficient = safe_quotient(
            regime.prefactor() * k * self.guard.powf(rayleigh, regime.exponent()),
            d_z,
        );

        let perimeter = PI * d_z;

        SurfaceBalance {
            surface_temperature: t,
            inner_heat_flow,
            radiation_coefficient,
            convection_coefficient,
            grashof,
            regime,
            convection_heat_flow: perimeter * convection_coefficient * delta_t,
            radiation_heat_flow: perimeter * radiation_coefficient * delta_t,
            outer_heat_flow: perimeter * (radiation_coefficient + convection_coefficient) * delta_t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::insulated_pipe::core::test_support::reference_solver;

    #[test]
    fn reference_pipe_at_320_kelvin() {
        let solver = reference_solver();
        let balance = solver.evaluate(320.0);

        assert!(
            balance.inner_heat_flow > 104.3 && balance.inner_heat_flow < 104.7,
            "q1={}",
            balance.inner_heat_flow
        );
        assert!(
            balance.radiation_coefficient > 5.7 && balance.radiation_coefficient < 5.9,
            "a2r={}",
            balance.radiation_coefficient
        );
        assert!(
            balance.grashof > 13.5e6 && balance.grashof < 14.21e6,
            "Gr={}",
            balance.grashof
        );
        assert_eq!(balance.regime, NaturalConvectionRegime::Transitional);
        assert!(
            balance.outer_heat_flow > 177.0 && balance.outer_heat_flow < 178.0,
            "q2={}",
            balance.outer_heat_flow
        );
        assert!(
            balance.convection_heat_flow > 85.0 && balance.convection_heat_flow < 86.0,
            "q_conv={}",
            balance.convection_heat_flow
        );
        assert_relative_eq!(
            balance.convection_heat_flow + balance.radiation_heat_flow,
            balance.outer_heat_flow,
            max_relative = 1e-12
        );
    }

    #[test]
    fn no_outer_flow_at_environment_temperature() {
        let solver = reference_solver();
        let balance = solver.evaluate(286.0);

        assert_relative_eq!(balance.radiation_coefficient, 0.0);
        assert_relative_eq!(balance.grashof, 0.0);
        assert_eq!(balance.regime, NaturalConvectionRegime::Stagnant);
        assert_relative_eq!(balance.outer_heat_flow, 0.0);
        assert!(balance.residual() < 0.0);
    }

    #[test]
    fn residual_changes_sign_once_across_the_scan_range() {
        let solver = reference_solver();

        assert!(solver.evaluate(300.0).residual() < 0.0);
        assert!(solver.evaluate(310.0).residual() > 0.0);
        assert!(solver.evaluate(350.0).residual() > 0.0);
        assert!(solver.evaluate(0.0).residual() < 0.0);
    }

    #[test]
    fn evaluation_is_pure() {
        let solver = reference_solver();
        assert_eq!(solver.evaluate(317.5), solver.evaluate(317.5));
    }
}
