use uom::si::{
    f64::{Ratio, ThermalConductivity, ThermodynamicTemperature},
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    interpolation::lagrange,
    units::{KinematicViscosity, kinematic_viscosity},
};

use super::DataError;

/// A transport property stored in a [`PropertyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Thermal conductivity, W/m·K.
    Conductivity,
    /// Kinematic viscosity, m²/s.
    KinematicViscosity,
    /// Prandtl number, dimensionless.
    Prandtl,
}

/// Temperature-dependent transport properties of one fluid.
///
/// Samples are stored column-wise and sorted by strictly increasing
/// temperature. Lookups interpolate over every sample of the requested
/// property and extrapolate freely outside the sampled range; use
/// [`PropertyTable::temperature_range`] if a caller needs to stay inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    temperature: Vec<f64>,
    conductivity: Vec<f64>,
    kinematic_viscosity: Vec<f64>,
    prandtl: Vec<f64>,
}

impl PropertyTable {
    /// Builds a table from `[temperature, conductivity, viscosity, prandtl]` rows.
    ///
    /// Values are in SI units: K, W/m·K, m²/s and dimensionless.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] if there are fewer than two rows, if any value
    /// is not finite, or if temperatures are not strictly increasing.
    pub fn from_rows(rows: &[[f64; 4]]) -> Result<Self, DataError> {
        let numbered: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (index + 1, *row))
            .collect();
        Self::from_numbered_rows(&numbered)
    }

    /// Builds a table from rows tagged with the line they came from.
    pub(super) fn from_numbered_rows(rows: &[(usize, [f64; 4])]) -> Result<Self, DataError> {
        if rows.len() < 2 {
            return Err(DataError::TooFewSamples { count: rows.len() });
        }

        for &(line, values) in rows {
            if let Some(index) = values.iter().position(|value| !value.is_finite()) {
                return Err(DataError::NonFinite {
                    line,
                    column: index + 1,
                });
            }
        }

        for pair in rows.windows(2) {
            let (line, row) = pair[1];
            let temperature = row[0];
            if temperature <= pair[0].1[0] {
                return Err(DataError::NotIncreasing { line, temperature });
            }
        }

        let column =
            |index: usize| -> Vec<f64> { rows.iter().map(|(_, row)| row[index]).collect() };

        Ok(Self {
            temperature: column(0),
            conductivity: column(1),
            kinematic_viscosity: column(2),
            prandtl: column(3),
        })
    }

    /// Returns the interpolated `property` at `temperature`, in SI base units.
    #[must_use]
    pub fn value_at(&self, temperature: ThermodynamicTemperature, property: Property) -> f64 {
        let samples = match property {
            Property::Conductivity => &self.conductivity,
            Property::KinematicViscosity => &self.kinematic_viscosity,
            Property::Prandtl => &self.prandtl,
        };
        lagrange(temperature.get::<kelvin>(), &self.temperature, samples)
    }

    /// Returns the interpolated thermal conductivity at `temperature`.
    #[must_use]
    pub fn conductivity(&self, temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(
            self.value_at(temperature, Property::Conductivity),
        )
    }

    /// Returns the interpolated kinematic viscosity at `temperature`.
    #[must_use]
    pub fn kinematic_viscosity(&self, temperature: ThermodynamicTemperature) -> KinematicViscosity {
        kinematic_viscosity(self.value_at(temperature, Property::KinematicViscosity))
    }

    /// Returns the interpolated Prandtl number at `temperature`.
    #[must_use]
    pub fn prandtl(&self, temperature: ThermodynamicTemperature) -> Ratio {
        Ratio::new::<ratio>(self.value_at(temperature, Property::Prandtl))
    }

    /// Returns the lowest and highest sampled temperatures.
    #[must_use]
    pub fn temperature_range(&self) -> [ThermodynamicTemperature; 2] {
        // Construction guarantees at least two samples.
        let first = self.temperature[0];
        let last = self.temperature[self.temperature.len() - 1];
        [
            ThermodynamicTemperature::new::<kelvin>(first),
            ThermodynamicTemperature::new::<kelvin>(last),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn temp(kelvin_value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(kelvin_value)
    }

    fn sample_table() -> PropertyTable {
        PropertyTable::from_rows(&[
            [250.0, 0.0223, 1.144e-5, 0.720],
            [300.0, 0.0263, 1.589e-5, 0.707],
            [350.0, 0.0300, 2.092e-5, 0.700],
        ])
        .unwrap()
    }

    #[test]
    fn exact_at_sample_temperatures() {
        let table = sample_table();

        assert_relative_eq!(table.value_at(temp(300.0), Property::Conductivity), 0.0263);
        assert_relative_eq!(
            table.value_at(temp(250.0), Property::KinematicViscosity),
            1.144e-5
        );
        assert_relative_eq!(table.value_at(temp(350.0), Property::Prandtl), 0.700);
    }

    #[test]
    fn typed_accessors_match_raw_values() {
        let table = sample_table();
        let t = temp(317.0);

        assert_relative_eq!(
            table.conductivity(t).get::<watt_per_meter_kelvin>(),
            table.value_at(t, Property::Conductivity)
        );
        assert_relative_eq!(
            table.kinematic_viscosity(t).value,
            table.value_at(t, Property::KinematicViscosity)
        );
        assert_relative_eq!(
            table.prandtl(t).get::<ratio>(),
            table.value_at(t, Property::Prandtl)
        );
    }

    #[test]
    fn interpolates_between_samples() {
        let table = sample_table();
        let k = table.value_at(temp(275.0), Property::Conductivity);
        assert!(k > 0.0223 && k < 0.0263, "k={k}");
    }

    #[test]
    fn reports_sampled_range() {
        let [low, high] = sample_table().temperature_range();
        assert_relative_eq!(low.get::<kelvin>(), 250.0);
        assert_relative_eq!(high.get::<kelvin>(), 350.0);
    }

    #[test]
    fn rejects_too_few_samples() {
        assert_eq!(
            PropertyTable::from_rows(&[[300.0, 0.0263, 1.589e-5, 0.707]]),
            Err(DataError::TooFewSamples { count: 1 })
        );
        assert_eq!(
            PropertyTable::from_rows(&[]),
            Err(DataError::TooFewSamples { count: 0 })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = PropertyTable::from_rows(&[
            [250.0, 0.0223, 1.144e-5, 0.720],
            [300.0, 0.0263, f64::NAN, 0.707],
        ])
        .unwrap_err();
        assert_eq!(err, DataError::NonFinite { line: 2, column: 3 });
    }

    #[test]
    fn rejects_repeated_or_unsorted_temperatures() {
        let err = PropertyTable::from_rows(&[
            [250.0, 0.0223, 1.144e-5, 0.720],
            [300.0, 0.0263, 1.589e-5, 0.707],
            [300.0, 0.0263, 1.589e-5, 0.707],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DataError::NotIncreasing {
                line: 3,
                temperature: 300.0
            }
        );

        let err = PropertyTable::from_rows(&[
            [300.0, 0.0263, 1.589e-5, 0.707],
            [250.0, 0.0223, 1.144e-5, 0.720],
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::NotIncreasing { line: 2, .. }));
    }
}
