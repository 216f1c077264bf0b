//! Metropolis acceptance criterion for a maximized fitness.

/// Probability of moving from `current` to `candidate` at `temperature`.
///
/// Returns `min(1, exp((candidate - current) / temperature))`: exactly `1.0`
/// when the candidate is at least as fit, otherwise a value in `(0, 1)` that
/// shrinks as the gap widens or the temperature drops.
///
/// `temperature` must be strictly positive.
///
/// # Examples
///
/// ```
/// use u_shiftopt::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(-5.0, -3.0, 0.5), 1.0);
/// let p = acceptance_probability(-3.0, -4.0, 1.0);
/// assert!((p - (-1.0f64).exp()).abs() < 1e-12);
/// ```
#[inline]
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    debug_assert!(temperature > 0.0, "temperature must be positive");
    ((candidate - current) / temperature).exp().min(1.0)
}
