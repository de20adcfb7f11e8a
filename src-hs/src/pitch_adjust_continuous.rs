use rand::Rng;

/// Move `value` by a uniform offset in `[-mpap * range, mpap * range]` and
/// clamp into `[lower, upper]`. Zero-width ranges are left untouched.
pub(crate) fn pitch_adjust_continuous<R: Rng>(
	value: f64,
	lower: f64,
	upper: f64,
	mpap: f64,
	rng: &mut R,
) -> f64 {
	let range = upper - lower;
	if !(range > 0.0) || !(mpap > 0.0) {
		return value;
	}
	let mut span = mpap * range;
	if !span.is_finite() {
		// anything wider than the range ends up clamped anyway
		span = range;
	}
	(value + rng.random_range(-span..=span)).clamp(lower, upper)
}
