/// Natural convection regime of a horizontal cylinder in still fluid.
///
/// The regime is selected from the Rayleigh number `Gr·Pr`. Each regime
/// supplies the exponent `A` and prefactor `C` of `Nu = C·(Gr·Pr)^A`:
///
/// | `Gr·Pr`        | regime         | `A`   | `C`   |
/// |----------------|----------------|-------|-------|
/// | below 1e-3     | `Stagnant`     | 0     | 0.45  |
/// | 1e-3 to 5e2    | `Laminar`      | 0.125 | 1.18  |
/// | 5e2 to 2e7     | `Transitional` | 0.25  | 0.54  |
/// | 2e7 and above  | `Turbulent`    | 0.33  | 0.135 |
///
/// Each range includes its lower bound. There is no blending at breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaturalConvectionRegime {
    Stagnant,
    Laminar,
    Transitional,
    Turbulent,
}

impl NaturalConvectionRegime {
    const LAMINAR_ONSET: f64 = 1e-3;
    const TRANSITIONAL_ONSET: f64 = 5e2;
    const TURBULENT_ONSET: f64 = 2e7;

    /// Selects the regime for a Rayleigh number `gr_pr`.
    ///
    /// A NaN fails every threshold and classifies as [`Self::Stagnant`].
    ///
    /// # Example
    ///
    /// ```
    /// use twine_insulation::support::convection::NaturalConvectionRegime;
    ///
    /// let regime = NaturalConvectionRegime::classify(1.0e7);
    /// assert_eq!(regime, NaturalConvectionRegime::Transitional);
    /// assert_eq!(regime.exponent(), 0.25);
    /// ```
    #[must_use]
    pub fn classify(gr_pr: f64) -> Self {
        if gr_pr >= Self::TURBULENT_ONSET {
            Self::Turbulent
        } else if gr_pr >= Self::TRANSITIONAL_ONSET {
            Self::Transitional
        } else if gr_pr >= Self::LAMINAR_ONSET {
            Self::Laminar
        } else {
            Self::Stagnant
        }
    }

    /// Exponent `A` applied to `Gr·Pr`.
    #[must_use]
    pub fn exponent(self) -> f64 {
        match self {
            Self::Stagnant => 0.0,
            Self::Laminar => 0.125,
            Self::Transitional => 0.25,
            Self::Turbulent => 0.33,
        }
    }

    /// Prefactor `C`.
    #[must_use]
    pub fn prefactor(self) -> f64 {
        match self {
            Self::Stagnant => 0.45,
            Self::Laminar => 1.18,
            Self::Transitional => 0.54,
            Self::Turbulent => 0.135,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use NaturalConvectionRegime::{Laminar, Stagnant, Transitional, Turbulent};

    #[test]
    fn classifies_sample_points() {
        let cases = [
            (1e-4, Stagnant),
            (1e-3, Laminar),
            (1e-2, Laminar),
            (50.0, Laminar),
            (4.9e2, Laminar),
            (5e2, Transitional),
            (5e3, Transitional),
            (7e5, Transitional),
            (1.9e7, Transitional),
            (2e7, Turbulent),
            (2e8, Turbulent),
        ];

        for (gr_pr, expected) in cases {
            assert_eq!(
                NaturalConvectionRegime::classify(gr_pr),
                expected,
                "Gr·Pr = {gr_pr}"
            );
        }
    }

    #[test]
    fn degenerate_rayleigh_numbers_are_stagnant() {
        assert_eq!(NaturalConvectionRegime::classify(0.0), Stagnant);
        assert_eq!(NaturalConvectionRegime::classify(-1.0e6), Stagnant);
        assert_eq!(NaturalConvectionRegime::classify(f64::NAN), Stagnant);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn coefficients() {
        assert_eq!(
            [Stagnant, Laminar, Transitional, Turbulent].map(NaturalConvectionRegime::exponent),
            [0.0, 0.125, 0.25, 0.33]
        );
        assert_eq!(
            [Stagnant, Laminar, Transitional, Turbulent].map(NaturalConvectionRegime::prefactor),
            [0.45, 1.18, 0.54, 0.135]
        );
    }
}
