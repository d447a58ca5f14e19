use std::cell::Cell;

use tracing::warn;

/// Divides `numerator` by `denominator`, returning zero if either is zero.
///
/// At `T = T_env` the radiation coefficient and Grashof number are `0/0`;
/// their physical limit contributes no heat flow, so zero is used.
pub(super) fn safe_quotient(numerator: f64, denominator: f64) -> f64 {
    if numerator == 0.0 || denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Exponentiation that watches for non-finite results.
///
/// The first non-finite result emits a single warning; later ones are silent.
/// Values are always returned unchanged.
#[derive(Debug, Default)]
pub(super) struct PowerGuard {
    reported: Cell<bool>,
}

impl PowerGuard {
    pub(super) fn powf(&self, base: f64, exponent: f64) -> f64 {
        let value = base.powf(exponent);
        if !value.is_finite() && !self.reported.replace(true) {
            warn!(
                base,
                exponent,
                value,
                "exponentiation produced a non-finite value; results may be invalid"
            );
        }
        value
    }

    pub(super) fn reported(&self) -> bool {
        self.reported.get()
    }
}
