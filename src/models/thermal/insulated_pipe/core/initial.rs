use std::f64::consts::PI;

use crate::support::properties::{Property, PropertyTable};

use super::{ProblemParameters, arithmetic::PowerGuard};

/// Quantities that depend only on the inputs, not on the surface temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct InitialValues {
    /// Liquid-side convection coefficient `h₁`, W/m²·K.
    pub(super) inner_convection_coefficient: f64,

    /// Conduction resistance of the insulation, K/W.
    pub(super) conduction_resistance: f64,

    /// Liquid-to-wall penetration resistance, K/W.
    pub(super) penetration_resistance: f64,
}

impl InitialValues {
    pub(super) fn new(
        params: &ProblemParameters,
        liquid: &PropertyTable,
        guard: &PowerGuard,
    ) -> Self {
        let input = params.input();
        let t_liquid = input.liquid_temperature;
        let d_i = params.inner_diameter_m();

        let k = liquid.value_at(t_liquid, Property::Conductivity);
        let nu = liquid.value_at(t_liquid, Property::KinematicViscosity);
        let pr = liquid.value_at(t_liquid, Property::Prandtl);

        let reynolds = input.liquid_velocity.value * d_i / nu;
        let nusselt = input
            .forced_convection
            .nusselt_with(reynolds, pr, |base, exp| guard.powf(base, exp));
        let inner_convection_coefficient = nusselt * k / d_i;

        let conduction_resistance = (params.overall_diameter_m() / params.outer_diameter_m()).ln()
            / (2.0 * PI * input.insulation_conductivity.value * input.length.value);
        let penetration_resistance = 1.0 / (inner_convection_coefficient * PI * d_i);

        Self {
            inner_convection_coefficient,
            conduction_resistance,
            penetration_resistance,
        }
    }

    /// Total resistance between the liquid and the insulation surface.
    pub(super) fn total_resistance(&self) -> f64 {
        self.conduction_resistance + self.penetration_resistance
    }
}
