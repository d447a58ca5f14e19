//! Steady-state heat balance of an insulated pipe.
//!
//! The liquid loses heat through the penetration resistance of its boundary
//! layer and the conduction resistance of the insulation. The insulation
//! surface releases it to still air by natural convection and radiation.
//! The surface temperature closing this balance is found with a coarse scan
//! for a sign change followed by bisection.

mod arithmetic;
mod config;
mod error;
mod initial;
mod input;
mod problem;
mod results;
mod scan;
mod surface;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::HeatBalanceConfig;
pub use error::HeatBalanceError;
pub use input::{InputError, PipeInput, ProblemParameters};
pub use results::Results;

use tracing::{debug, trace};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{HeatTransfer, Power, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    properties::PropertyTable,
    units::{ThermalResistance, thermal_resistance},
};

use arithmetic::PowerGuard;
use initial::InitialValues;
use problem::{BalanceProblem, SurfaceModel};
use scan::{Bracket, MAX_SCAN_POINTS, scan, span};

/// Solves the heat balance of one insulated pipe.
///
/// Liquid-side quantities that do not depend on the surface temperature are
/// computed once in [`HeatBalanceSolver::new`]. Each call to
/// [`HeatBalanceSolver::solve`] repeats the search from scratch and returns
/// bit-identical results.
///
/// Property tables are borrowed, so any number of solvers can share them.
/// The solver tracks whether a non-finite power was seen in a [`Cell`](std::cell::Cell),
/// which makes it `Send` but not `Sync`.
///
/// # Example
///
/// ```
/// use twine_insulation::{
///     models::thermal::insulated_pipe::{HeatBalanceSolver, PipeInput, ProblemParameters},
///     support::{convection::ForcedConvection, properties::PropertyTable},
/// };
/// use uom::si::{
///     f64::{Length, Ratio, ThermalConductivity, ThermodynamicTemperature, Velocity},
///     length::meter,
///     power::watt,
///     ratio::ratio,
///     thermal_conductivity::watt_per_meter_kelvin,
///     thermodynamic_temperature::kelvin,
///     velocity::meter_per_second,
/// };
///
/// let params = ProblemParameters::new(PipeInput {
///     inner_diameter: Length::new::<meter>(0.08),
///     wall_thickness: Length::new::<meter>(0.004),
///     insulation_thickness: Length::new::<meter>(0.03),
///     length: Length::new::<meter>(1.0),
///     liquid_velocity: Velocity::new::<meter_per_second>(1.0),
///     liquid_temperature: ThermodynamicTemperature::new::<kelvin>(413.0),
///     environment_temperature: ThermodynamicTemperature::new::<kelvin>(286.0),
///     insulation_emissivity: Ratio::new::<ratio>(0.92),
///     insulation_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.093),
///     forced_convection: ForcedConvection::LOW_VISCOSITY,
/// })?;
///
/// let solver = HeatBalanceSolver::new(params, PropertyTable::water(), PropertyTable::air());
/// let results = solver.solve()?;
///
/// let surface = results.surface_temperature.get::<kelvin>();
/// assert!(surface > 305.0 && surface < 315.0);
/// assert!((results.inner_heat_flow - results.outer_heat_flow).get::<watt>().abs() < 1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HeatBalanceSolver<'a> {
    params: ProblemParameters,
    liquid: &'a PropertyTable,
    air: &'a PropertyTable,
    initial: InitialValues,
    guard: PowerGuard,
    config: HeatBalanceConfig,
}

impl<'a> HeatBalanceSolver<'a> {
    /// Creates a solver with the default [`HeatBalanceConfig`].
    ///
    /// `liquid` holds the properties of the fluid in the pipe and `air` those
    /// of the outer film.
    #[must_use]
    pub fn new(
        params: ProblemParameters,
        liquid: &'a PropertyTable,
        air: &'a PropertyTable,
    ) -> Self {
        Self::with_config(params, liquid, air, HeatBalanceConfig::default())
    }

    /// Creates a solver with an explicit configuration.
    #[must_use]
    pub fn with_config(
        params: ProblemParameters,
        liquid: &'a PropertyTable,
        air: &'a PropertyTable,
        config: HeatBalanceConfig,
    ) -> Self {
        let guard = PowerGuard::default();
        let initial = InitialValues::new(&params, liquid, &guard);

        debug!(
            inner_convection_coefficient = initial.inner_convection_coefficient,
            conduction_resistance = initial.conduction_resistance,
            penetration_resistance = initial.penetration_resistance,
            "computed liquid-side values"
        );

        Self {
            params,
            liquid,
            air,
            initial,
            guard,
            config,
        }
    }

    /// Returns the problem parameters.
    #[must_use]
    pub fn parameters(&self) -> &ProblemParameters {
        &self.params
    }

    /// Returns the liquid property table.
    #[must_use]
    pub fn liquid(&self) -> &'a PropertyTable {
        self.liquid
    }

    /// Conduction resistance of the insulation.
    #[must_use]
    pub fn conduction_resistance(&self) -> ThermalResistance {
        thermal_resistance(self.initial.conduction_resistance)
    }

    /// Penetration resistance between the liquid and the wall.
    #[must_use]
    pub fn penetration_resistance(&self) -> ThermalResistance {
        thermal_resistance(self.initial.penetration_resistance)
    }

    /// Liquid-side convection coefficient.
    #[must_use]
    pub fn inner_convection_coefficient(&self) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.initial.inner_convection_coefficient)
    }

    /// Heat flow residual `q_out - q_in` at a candidate surface temperature.
    ///
    /// Positive when the surface releases more heat than it receives.
    #[must_use]
    pub fn residual(&self, surface_temperature: ThermodynamicTemperature) -> Power {
        Power::new::<watt>(self.evaluate(surface_temperature.get::<kelvin>()).residual())
    }

    /// Whether an exponentiation has produced a non-finite value.
    ///
    /// The first such value also emits a `tracing` warning.
    #[must_use]
    pub fn non_finite_reported(&self) -> bool {
        self.guard.reported()
    }

    /// Finds the surface temperature that balances the heat flows.
    ///
    /// # Errors
    ///
    /// Returns [`HeatBalanceError`] if the scan step is invalid, if the scan
    /// finds no sign change, or if bisection fails or does not converge
    /// within the iteration limit.
    pub fn solve(&self) -> Result<Results, HeatBalanceError> {
        let balance = match self.bracket()? {
            Bracket::Root(t) => {
                debug!(surface_temperature = t, "scan hit the balance on a grid point");
                self.evaluate(t)
            }
            Bracket::Interval(bounds) => {
                debug!(lower = bounds[0], upper = bounds[1], "bracketed surface temperature");

                let solution = bisection::solve(
                    &SurfaceModel::new(self),
                    &BalanceProblem,
                    bounds,
                    &self.config.bisection(),
                    |event: &bisection::Event<'_, _, _>| {
                        if let Ok(eval) = event.result() {
                            trace!(
                                surface_temperature = event.x(),
                                residual = eval.residuals[0],
                                "bisection step"
                            );
                        }
                        None
                    },
                )?;

                if solution.status != bisection::Status::Converged {
                    return Err(HeatBalanceError::MaxIters {
                        residual: Power::new::<watt>(solution.residual),
                        iters: solution.iters,
                    });
                }

                debug!(
                    surface_temperature = solution.x,
                    residual = solution.residual,
                    iters = solution.iters,
                    "heat balance converged"
                );

                solution.snapshot.output
            }
        };

        Ok(Results::new(&self.initial, &balance))
    }

    fn bracket(&self) -> Result<Bracket, HeatBalanceError> {
        let input = self.params.input();
        let upper = span(
            input.liquid_temperature.get::<kelvin>(),
            input.environment_temperature.get::<kelvin>(),
            self.config.scan_min_span.get::<delta_kelvin>(),
        );

        let step = self.config.scan_step.get::<delta_kelvin>();
        if !(step.is_finite() && step > 0.0 && upper / step <= MAX_SCAN_POINTS) {
            return Err(HeatBalanceError::InvalidScanStep {
                step: self.config.scan_step,
            });
        }

        let tol = self.config.heat_flow_tol.get::<watt>();

        scan(|t| self.evaluate(t).residual(), step, upper, tol).ok_or(
            HeatBalanceError::NoSignChange {
                lower: ThermodynamicTemperature::new::<kelvin>(0.0),
                upper: ThermodynamicTemperature::new::<kelvin>(upper),
            },
        )
    }
}
