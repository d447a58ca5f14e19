//! Results of a converged heat balance.

use uom::si::{
    f64::{HeatTransfer, Power, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    convection::NaturalConvectionRegime,
    units::{ThermalResistance, thermal_resistance},
};

use super::{initial::InitialValues, surface::SurfaceBalance};

/// Heat balance of an insulated pipe at its converged surface temperature.
///
/// Heat flows are for the whole pipe. A value of this type only exists for a
/// converged solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Conduction resistance of the insulation layer.
    pub conduction_resistance: ThermalResistance,

    /// Resistance between the liquid and the pipe wall.
    pub penetration_resistance: ThermalResistance,

    /// Liquid-side convection coefficient.
    pub inner_convection_coefficient: HeatTransfer,

    /// Insulation surface temperature at which the balance closes.
    pub surface_temperature: ThermodynamicTemperature,

    /// Natural convection coefficient of the outer air film.
    pub outer_convection_coefficient: HeatTransfer,

    /// Linearized radiation coefficient of the insulation surface.
    pub outer_radiation_coefficient: HeatTransfer,

    /// Heat carried away by natural convection.
    pub outer_convection_heat_flow: Power,

    /// Heat carried away by radiation.
    pub outer_radiation_heat_flow: Power,

    /// Heat conducted from the liquid to the insulation surface.
    pub inner_heat_flow: Power,

    /// Heat released by the insulation surface to the environment.
    pub outer_heat_flow: Power,

    /// Natural convection regime of the outer air film.
    pub regime: NaturalConvectionRegime,
}

impl Results {
    pub(super) fn new(initial: &InitialValues, balance: &SurfaceBalance) -> Self {
        let coefficient = HeatTransfer::new::<watt_per_square_meter_kelvin>;

        Self {
            conduction_resistance: thermal_resistance(initial.conduction_resistance),
            penetration_resistance: thermal_resistance(initial.penetration_resistance),
            inner_convection_coefficient: coefficient(initial.inner_convection_coefficient),
            surface_temperature: ThermodynamicTemperature::new::<kelvin>(
                balance.surface_temperature,
            ),
            outer_convection_coefficient: coefficient(balance.convection_coefficient),
            outer_radiation_coefficient: coefficient(balance.radiation_coefficient),
            outer_convection_heat_flow: Power::new::<watt>(balance.convection_heat_flow),
            outer_radiation_heat_flow: Power::new::<watt>(balance.radiation_heat_flow),
            inner_heat_flow: Power::new::<watt>(balance.inner_heat_flow),
            outer_heat_flow: Power::new::<watt>(balance.outer_heat_flow),
            regime: balance.regime,
        }
    }
}
