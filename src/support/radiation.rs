//! Radiant exchange between an insulated surface and its surroundings.

use uom::si::{f64::Ratio, ratio::ratio};

/// Stefan-Boltzmann constant scaled for the `(T/100)⁴` form, W/m²·K⁴ × 10⁸.
pub const STEFAN_BOLTZMANN: f64 = 5.670_367;

/// Emissivity of open surroundings, treated as a black body.
pub const ENVIRONMENT_EMISSIVITY: f64 = 1.0;

/// Typical emissivities of insulation jacketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsulationEmissivity {
    /// Polished metal jacket.
    Low,
    /// Weathered or painted metal jacket.
    Medium,
    /// Fabric, mastic or other non-metallic covering.
    High,
}

impl InsulationEmissivity {
    /// Returns the emissivity as a ratio.
    #[must_use]
    pub fn ratio(self) -> Ratio {
        let value = match self {
            Self::Low => 0.3,
            Self::Medium => 0.6,
            Self::High => 0.9,
        };
        Ratio::new::<ratio>(value)
    }
}

impl From<InsulationEmissivity> for Ratio {
    fn from(emissivity: InsulationEmissivity) -> Self {
        emissivity.ratio()
    }
}

/// Exchange ratio between a surface and the body enclosing it.
///
/// `1 / (1/ε_s + (A_s/A_e)·(1/ε_e − 1))` for surface emissivity `ε_s`,
/// enclosure emissivity `ε_e` and area ratio `A_s/A_e`. With a black
/// enclosure the ratio equals `ε_s`.
#[must_use]
pub fn exchange_ratio(surface_emissivity: f64, area_ratio: f64, enclosure_emissivity: f64) -> f64 {
    1.0 / (1.0 / surface_emissivity + area_ratio * (1.0 / enclosure_emissivity - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn black_enclosure_keeps_surface_emissivity() {
        assert_relative_eq!(exchange_ratio(0.92, 0.6, ENVIRONMENT_EMISSIVITY), 0.92);
    }

    #[test]
    fn grey_enclosure_lowers_the_ratio() {
        let value = exchange_ratio(0.9, 0.5, 0.8);
        assert_relative_eq!(value, 1.0 / (1.0 / 0.9 + 0.5 * 0.25));
        assert!(value < 0.9);
    }

    #[test]
    fn presets() {
        assert_relative_eq!(InsulationEmissivity::Low.ratio().get::<ratio>(), 0.3);
        assert_relative_eq!(InsulationEmissivity::Medium.ratio().get::<ratio>(), 0.6);
        assert_relative_eq!(Ratio::from(InsulationEmissivity::High).get::<ratio>(), 0.9);
    }
}
