/// Largest number of grid points a scan may evaluate.
pub(super) const MAX_SCAN_POINTS: f64 = 1e6;

/// Where the scan located the balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Bracket {
    /// A grid point already satisfies the residual tolerance.
    Root(f64),
    /// Neighbouring grid points with residuals of opposite sign.
    Interval([f64; 2]),
}

/// Samples `residual` at `0, step, 2·step, …` below `span`.
///
/// Returns the first grid point within `tol` of zero or the first pair of
/// neighbours whose residuals change sign, whichever comes first. Non-finite
/// residuals never form a bracket. Returns `None` when nothing is found.
///
/// `step` must be positive and finite, with at most [`MAX_SCAN_POINTS`] grid
/// points below `span`.
pub(super) fn scan(
    mut residual: impl FnMut(f64) -> f64,
    step: f64,
    span: f64,
    tol: f64,
) -> Option<Bracket> {
    let mut previous: Option<(f64, f64)> = None;

    for t in (0_u32..).map(|i| f64::from(i) * step).take_while(|&t| t < span) {
        let r = residual(t);

        if r.abs() <= tol {
            return Some(Bracket::Root(t));
        }

        if let Some((t_prev, r_prev)) = previous
            && ((r_prev < 0.0 && r > 0.0) || (r_prev > 0.0 && r < 0.0))
        {
            return Some(Bracket::Interval([t_prev, t]));
        }

        previous = Some((t, r));
    }

    None
}

/// Upper end of the scan range for the given liquid and environment temperatures.
pub(super) fn span(t_liquid: f64, t_env: f64, min_span: f64) -> f64 {
    (t_liquid + t_env).abs().max(min_span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_sign_change() {
        let bracket = scan(|t| t - 123.0, 10.0, 200.0, 1e-3);
        assert_eq!(bracket, Some(Bracket::Interval([120.0, 130.0])));

        let bracket = scan(|t| (t - 35.0) * (t - 75.0), 10.0, 200.0, 1e-3);
        assert_eq!(bracket, Some(Bracket::Interval([30.0, 40.0])));
    }

    #[test]
    fn falling_residual_also_brackets() {
        let bracket = scan(|t| 55.0 - t, 10.0, 200.0, 1e-3);
        assert_eq!(bracket, Some(Bracket::Interval([50.0, 60.0])));
    }

    #[test]
    fn grid_point_on_the_root() {
        assert_eq!(
            scan(|t| t - 40.0, 10.0, 200.0, 1e-3),
            Some(Bracket::Root(40.0))
        );
        assert_eq!(
            scan(|t| t - 40.0005, 10.0, 200.0, 1e-3),
            Some(Bracket::Root(40.0))
        );
    }

    #[test]
    fn root_at_or_beyond_span_is_missed() {
        assert_eq!(scan(|t| t - 205.0, 10.0, 200.0, 1e-3), None);
        assert_eq!(scan(|t| t - 200.0, 10.0, 200.0, 1e-3), None);
    }

    #[test]
    fn nan_residuals_never_bracket() {
        assert_eq!(scan(|_| f64::NAN, 10.0, 200.0, 1e-3), None);

        let bracket = scan(
            |t| if t < 50.0 { f64::NAN } else { t - 75.0 },
            10.0,
            200.0,
            1e-3,
        );
        assert_eq!(bracket, Some(Bracket::Interval([70.0, 80.0])));
    }

    #[test]
    fn span_has_a_minimum() {
        assert!((span(413.0, 286.0, 200.0) - 699.0).abs() < 1e-12);
        assert!((span(50.0, 40.0, 200.0) - 200.0).abs() < 1e-12);
    }
}
