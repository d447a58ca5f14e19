/// Forced convection correlation `Nu = C·Re^A·Pr^B` for flow in a pipe.
///
/// The presets cover the common cases. Any other set of constants can be
/// built directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcedConvection {
    /// Reynolds exponent `A`.
    pub a: f64,
    /// Prandtl exponent `B`.
    pub b: f64,
    /// Prefactor `C`.
    pub c: f64,
}

impl ForcedConvection {
    /// Dittus-Boelter form for low-viscosity liquids.
    pub const LOW_VISCOSITY: Self = Self {
        a: 0.8,
        b: 0.4,
        c: 0.023,
    };

    /// Sieder-Tate form for high-viscosity liquids, without the wall correction.
    pub const HIGH_VISCOSITY: Self = Self {
        a: 0.8,
        b: 0.33,
        c: 0.027,
    };

    /// Cross flow perpendicular to a cylinder.
    pub const PERPENDICULAR_FLOW: Self = Self {
        a: 0.6,
        b: 0.31,
        c: 0.283,
    };

    /// Returns the Nusselt number for the given Reynolds and Prandtl numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_insulation::support::convection::ForcedConvection;
    ///
    /// let nu = ForcedConvection::LOW_VISCOSITY.nusselt(10_000.0, 1.0);
    /// assert!((nu - 0.023 * 10_000.0_f64.powf(0.8)).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn nusselt(&self, reynolds: f64, prandtl: f64) -> f64 {
        self.nusselt_with(reynolds, prandtl, f64::powf)
    }

    /// Same as [`Self::nusselt`] with each power computed by `pow`.
    pub(crate) fn nusselt_with(
        &self,
        reynolds: f64,
        prandtl: f64,
        mut pow: impl FnMut(f64, f64) -> f64,
    ) -> f64 {
        self.c * pow(reynolds, self.a) * pow(prandtl, self.b)
    }
}

impl Default for ForcedConvection {
    fn default() -> Self {
        Self::LOW_VISCOSITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn low_viscosity_water_in_reference_pipe() {
        // Re = 1 m/s · 0.08 m / 0.2132e-6 m²/s, Pr = 1.241
        let nu = ForcedConvection::LOW_VISCOSITY.nusselt(375_235.0, 1.241);
        assert_relative_eq!(nu, 0.023 * 375_235.0_f64.powf(0.8) * 1.241_f64.powf(0.4));
        assert!(nu > 700.0 && nu < 800.0, "nu={nu}");
    }

    #[test]
    fn custom_power_is_used() {
        let mut calls = 0;
        let nu = ForcedConvection::PERPENDICULAR_FLOW.nusselt_with(4.0, 9.0, |_, _| {
            calls += 1;
            2.0
        });
        assert_eq!(calls, 2);
        assert_relative_eq!(nu, 0.283 * 4.0);
    }

    #[test]
    fn default_is_low_viscosity() {
        assert_eq!(ForcedConvection::default(), ForcedConvection::LOW_VISCOSITY);
        assert_ne!(ForcedConvection::HIGH_VISCOSITY, ForcedConvection::LOW_VISCOSITY);
    }
}
