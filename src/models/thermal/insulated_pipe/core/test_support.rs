use uom::si::{
    f64::{Length, Ratio, ThermalConductivity, ThermodynamicTemperature, Velocity},
    length::{meter, millimeter},
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{convection::ForcedConvection, properties::PropertyTable};

use super::{HeatBalanceSolver, PipeInput, ProblemParameters};

/// Water at 413 K in an 80 mm pipe with 30 mm of insulation, in 286 K air.
pub(crate) fn reference_input() -> PipeInput {
    PipeInput {
        inner_diameter: Length::new::<millimeter>(80.0),
        wall_thickness: Length::new::<millimeter>(4.0),
        insulation_thickness: Length::new::<millimeter>(30.0),
        length: Length::new::<meter>(1.0),
        liquid_velocity: Velocity::new::<meter_per_second>(1.0),
        liquid_temperature: ThermodynamicTemperature::new::<kelvin>(413.0),
        environment_temperature: ThermodynamicTemperature::new::<kelvin>(286.0),
        insulation_emissivity: Ratio::new::<ratio>(0.92),
        insulation_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.093),
        forced_convection: ForcedConvection::LOW_VISCOSITY,
    }
}

pub(crate) fn reference_parameters() -> ProblemParameters {
    ProblemParameters::new(reference_input()).unwrap()
}

pub(crate) fn reference_solver() -> HeatBalanceSolver<'static> {
    HeatBalanceSolver::new(
        reference_parameters(),
        PropertyTable::water(),
        PropertyTable::air(),
    )
}
