use std::sync::LazyLock;

use super::PropertyTable;

/// Dry air at atmospheric pressure, 100 K to 600 K.
///
/// Columns: temperature (K), conductivity (W/m·K), kinematic viscosity
/// (m²/s), Prandtl number.
const AIR: [[f64; 4]; 11] = [
    [100.0, 0.009_34, 2.000e-6, 0.786],
    [150.0, 0.013_8, 4.426e-6, 0.758],
    [200.0, 0.018_1, 7.590e-6, 0.737],
    [250.0, 0.022_3, 11.44e-6, 0.720],
    [300.0, 0.026_3, 15.89e-6, 0.707],
    [350.0, 0.030_0, 20.92e-6, 0.700],
    [400.0, 0.033_8, 26.41e-6, 0.690],
    [450.0, 0.037_3, 32.39e-6, 0.686],
    [500.0, 0.040_7, 38.79e-6, 0.684],
    [550.0, 0.043_9, 45.57e-6, 0.683],
    [600.0, 0.046_9, 52.69e-6, 0.685],
];

/// Saturated liquid water, 0 °C to 200 °C.
const WATER: [[f64; 4]; 11] = [
    [273.15, 0.561, 1.792e-6, 13.5],
    [293.15, 0.598, 1.004e-6, 7.01],
    [313.15, 0.631, 0.658e-6, 4.32],
    [333.15, 0.654, 0.475e-6, 2.99],
    [353.15, 0.670, 0.365e-6, 2.22],
    [373.15, 0.679, 0.294e-6, 1.75],
    [393.15, 0.683, 0.246e-6, 1.44],
    [413.15, 0.683, 0.213e-6, 1.24],
    [433.15, 0.680, 0.187e-6, 1.09],
    [453.15, 0.673, 0.169e-6, 0.983],
    [473.15, 0.663, 0.155e-6, 0.910],
];

static AIR_TABLE: LazyLock<PropertyTable> =
    LazyLock::new(|| PropertyTable::from_rows(&AIR).expect("built-in air table is valid"));

static WATER_TABLE: LazyLock<PropertyTable> =
    LazyLock::new(|| PropertyTable::from_rows(&WATER).expect("built-in water table is valid"));

impl PropertyTable {
    /// Built-in properties of dry air at atmospheric pressure.
    ///
    /// Suitable as the environment table for a pipe in still air.
    #[must_use]
    pub fn air() -> &'static PropertyTable {
        &AIR_TABLE
    }

    /// Built-in properties of saturated liquid water.
    #[must_use]
    pub fn water() -> &'static PropertyTable {
        &WATER_TABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

    use crate::support::properties::Property;

    fn temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn air_near_room_temperature() {
        let air = PropertyTable::air();
        let t = temp(300.0);

        assert_relative_eq!(air.value_at(t, Property::Conductivity), 0.0263);
        assert_relative_eq!(air.value_at(t, Property::KinematicViscosity), 15.89e-6);
        assert_relative_eq!(air.value_at(t, Property::Prandtl), 0.707);

        let k = air.value_at(temp(310.0), Property::Conductivity);
        assert!(k > 0.0263 && k < 0.0300, "k={k}");
    }

    #[test]
    fn water_at_hot_liquid_temperature() {
        let water = PropertyTable::water();
        let t = temp(413.0);

        let k = water.value_at(t, Property::Conductivity);
        assert_relative_eq!(k, 0.683, epsilon = 2e-3);

        let nu = water.value_at(t, Property::KinematicViscosity);
        assert_relative_eq!(nu, 0.213e-6, epsilon = 2e-9);

        let pr = water.value_at(t, Property::Prandtl);
        assert_relative_eq!(pr, 1.24, epsilon = 1e-2);
    }

    #[test]
    fn built_ins_are_shared() {
        assert!(std::ptr::eq(PropertyTable::air(), PropertyTable::air()));
        let [low, high] = PropertyTable::water().temperature_range();
        assert_relative_eq!(low.get::<kelvin>(), 273.15);
        assert_relative_eq!(high.get::<kelvin>(), 473.15);
    }
}
