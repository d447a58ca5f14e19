use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the surface temperature search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalanceConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the surface temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the heat flow residual (outer - inner).
    pub heat_flow_tol: Power,

    /// Spacing of the bracket scan grid.
    pub scan_step: TemperatureInterval,

    /// Smallest upper end of the scan range.
    ///
    /// The range extends to `|T_liquid + T_env|` when that is larger.
    pub scan_min_span: TemperatureInterval,
}

impl Default for HeatBalanceConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-3),
            heat_flow_tol: Power::new::<watt>(1e-3),
            scan_step: TemperatureInterval::new::<delta_kelvin>(10.0),
            scan_min_span: TemperatureInterval::new::<delta_kelvin>(200.0),
        }
    }
}

impl HeatBalanceConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.heat_flow_tol.get::<watt>(),
        }
    }
}
