use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Area, Power, TemperatureInterval, Time},
        area::square_meter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        time::second,
    },
    typenum::{N1, N2, P1, P2, P3, Z0},
};

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a kinematic viscosity from a value in m²/s.
pub(crate) fn kinematic_viscosity(square_meters_per_second: f64) -> KinematicViscosity {
    Area::new::<square_meter>(square_meters_per_second) / Time::new::<second>(1.0)
}

/// Builds a thermal resistance from a value in K/W.
pub(crate) fn thermal_resistance(kelvin_per_watt: f64) -> ThermalResistance {
    TemperatureInterval::new::<delta_kelvin>(kelvin_per_watt) / Power::new::<watt>(1.0)
}
