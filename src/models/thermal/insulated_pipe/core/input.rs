use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    f64::{Length, Ratio, ThermalConductivity, ThermodynamicTemperature, Velocity},
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{
        Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitIntervalLowerOpen,
    },
    convection::ForcedConvection,
    radiation::{ENVIRONMENT_EMISSIVITY, exchange_ratio},
};

/// Raw description of an insulated pipe and its surroundings.
///
/// The pipe carries a liquid at a fixed temperature and loses heat through
/// its wall and insulation to still air. Values are validated and turned into
/// geometry by [`ProblemParameters::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeInput {
    /// Inner diameter of the pipe.
    pub inner_diameter: Length,

    /// Pipe wall thickness.
    pub wall_thickness: Length,

    /// Insulation layer thickness.
    pub insulation_thickness: Length,

    /// Pipe length.
    pub length: Length,

    /// Mean liquid velocity.
    pub liquid_velocity: Velocity,

    /// Bulk liquid temperature.
    pub liquid_temperature: ThermodynamicTemperature,

    /// Temperature of the surrounding air and surfaces.
    pub environment_temperature: ThermodynamicTemperature,

    /// Emissivity of the insulation surface.
    pub insulation_emissivity: Ratio,

    /// Thermal conductivity of the insulation.
    pub insulation_conductivity: ThermalConductivity,

    /// Correlation for the liquid-side convection coefficient.
    pub forced_convection: ForcedConvection,
}

/// A [`PipeInput`] field that violates its constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {field}: {source}")]
pub struct InputError {
    /// Name of the offending field.
    pub field: &'static str,

    /// The violated constraint.
    pub source: ConstraintError,
}

/// Validated pipe input with its derived geometry.
///
/// Derived values are computed once on construction. There are no setters:
/// changing an input means building new parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProblemParameters {
    input: PipeInput,
    outer_diameter: f64,
    overall_diameter: f64,
    outer_area: f64,
    overall_area: f64,
    radiant_ratio: f64,
}

impl ProblemParameters {
    /// Validates `input` and derives the pipe geometry.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first field that is out of range:
    /// diameter, length and insulation conductivity must be strictly
    /// positive, thicknesses and velocity non-negative, temperatures above
    /// absolute zero, and emissivity within `(0, 1]`.
    pub fn new(input: PipeInput) -> Result<Self, InputError> {
        check::<StrictlyPositive>("inner_diameter", input.inner_diameter.get::<meter>())?;
        check::<NonNegative>("wall_thickness", input.wall_thickness.get::<meter>())?;
        check::<NonNegative>(
            "insulation_thickness",
            input.insulation_thickness.get::<meter>(),
        )?;
        check::<StrictlyPositive>("length", input.length.get::<meter>())?;
        check::<NonNegative>(
            "liquid_velocity",
            input.liquid_velocity.get::<meter_per_second>(),
        )?;
        check::<StrictlyPositive>(
            "liquid_temperature",
            input.liquid_temperature.get::<kelvin>(),
        )?;
        check::<StrictlyPositive>(
            "environment_temperature",
            input.environment_temperature.get::<kelvin>(),
        )?;
        check::<UnitIntervalLowerOpen>(
            "insulation_emissivity",
            input.insulation_emissivity.get::<ratio>(),
        )?;
        check::<StrictlyPositive>(
            "insulation_conductivity",
            input.insulation_conductivity.get::<watt_per_meter_kelvin>(),
        )?;

        let inner_diameter = input.inner_diameter.get::<meter>();
        let outer_diameter = inner_diameter + 2.0 * input.wall_thickness.get::<meter>();
        let overall_diameter = outer_diameter + 2.0 * input.insulation_thickness.get::<meter>();

        // Both measures carry the same π² factor; only their ratio is used.
        let outer_area = outer_diameter * PI * PI;
        let overall_area = overall_diameter * PI * PI;

        let radiant_ratio = exchange_ratio(
            input.insulation_emissivity.get::<ratio>(),
            outer_area / overall_area,
            ENVIRONMENT_EMISSIVITY,
        );

        Ok(Self {
            input,
            outer_diameter,
            overall_diameter,
            outer_area,
            overall_area,
            radiant_ratio,
        })
    }

    /// Returns the validated raw input.
    #[must_use]
    pub fn input(&self) -> &PipeInput {
        &self.input
    }

    /// Outer diameter of the bare pipe, `d_i + 2·wall`.
    #[must_use]
    pub fn outer_diameter(&self) -> Length {
        Length::new::<meter>(self.outer_diameter)
    }

    /// Outer diameter of the insulation, `d_o + 2·insulation`.
    #[must_use]
    pub fn overall_diameter(&self) -> Length {
        Length::new::<meter>(self.overall_diameter)
    }

    /// Area measure of the bare pipe, `d_o·π²`.
    #[must_use]
    pub fn outer_area_measure(&self) -> Length {
        Length::new::<meter>(self.outer_area)
    }

    /// Area measure of the insulation surface, `d_z·π²`.
    #[must_use]
    pub fn overall_area_measure(&self) -> Length {
        Length::new::<meter>(self.overall_area)
    }

    /// Radiant exchange ratio between the insulation and the environment.
    #[must_use]
    pub fn radiant_ratio(&self) -> Ratio {
        Ratio::new::<ratio>(self.radiant_ratio)
    }

    pub(super) fn inner_diameter_m(&self) -> f64 {
        self.input.inner_diameter.get::<meter>()
    }

    pub(super) fn outer_diameter_m(&self) -> f64 {
        self.outer_diameter
    }

    pub(super) fn overall_diameter_m(&self) -> f64 {
        self.overall_diameter
    }

    pub(super) fn radiant_ratio_value(&self) -> f64 {
        self.radiant_ratio
    }
}

fn check<C: Constraint<f64>>(field: &'static str, value: f64) -> Result<(), InputError> {
    C::check(&value).map_err(|source| InputError { field, source })
}
