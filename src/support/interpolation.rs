//! Polynomial interpolation over tabulated samples.

/// Evaluates the Lagrange polynomial through `(xs[i], ys[i])` at `x`.
///
/// Every sample contributes `ys[i]·Πⱼ≠ᵢ (x − xs[j]) / (xs[i] − xs[j])`.
/// The polynomial passes exactly through each sample point.
///
/// The abscissas need not be sorted, but they must be distinct: repeated
/// values divide by zero. A single sample degrades to a constant and an empty
/// sample set evaluates to zero.
///
/// No range check is performed, so `x` outside the sampled range
/// extrapolates the polynomial, which can swing far from physical values.
///
/// # Example
///
/// ```
/// use twine_insulation::support::interpolation::lagrange;
///
/// let xs = [300.0, 400.0, 500.0];
/// let ys = [20.0, 30.0, 40.0];
/// assert_eq!(lagrange(400.0, &xs, &ys), 30.0);
/// assert!((lagrange(350.0, &xs, &ys) - 25.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn lagrange(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "sample arrays must have equal length");

    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (&xi, &yi))| {
            xs.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(yi, |term, (_, &xj)| term * ((x - xj) / (xi - xj)))
        })
        .sum()
}
