use rand::Rng;

use crate::objective::ObjectiveFunction;

/// Move discrete parameter `i` from `value` by 1..=`mpai` indices in a
/// random direction, clamped to `[0, count - 1]`.
pub(crate) fn pitch_adjust_discrete<O, R>(
	objective: &O,
	i: usize,
	value: f64,
	count: usize,
	mpai: usize,
	rng: &mut R,
) -> f64
where
	O: ObjectiveFunction + ?Sized,
	R: Rng,
{
	if mpai == 0 || count < 2 {
		return value;
	}
	let index = objective.discrete_index(i, value).min(count - 1);
	let step = rng.random_range(1..=mpai);
	let moved = if rng.random::<bool>() {
		index.saturating_add(step).min(count - 1)
	} else {
		index.saturating_sub(step)
	};
	objective.discrete_value(i, moved)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::functions::DiscreteXContinuousY;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_moves_within_mpai_and_clamps() {
		let f = DiscreteXContinuousY;
		let mut rng = StdRng::seed_from_u64(23);
		for _ in 0..1000 {
			let v = pitch_adjust_discrete(&f, 0, 0.0, 201, 2, &mut rng);
			assert!([-2.0, -1.0, 1.0, 2.0].contains(&v), "unexpected {v}");

			let top = pitch_adjust_discrete(&f, 0, 100.0, 201, 2, &mut rng);
			assert!((98.0..=100.0).contains(&top));
			let bottom = pitch_adjust_discrete(&f, 0, -100.0, 201, 2, &mut rng);
			assert!((-100.0..=-98.0).contains(&bottom));
		}
	}

	#[test]
	fn test_disabled_without_room() {
		let f = DiscreteXContinuousY;
		let mut rng = StdRng::seed_from_u64(23);
		assert_eq!(pitch_adjust_discrete(&f, 0, 5.0, 201, 0, &mut rng), 5.0);
		assert_eq!(pitch_adjust_discrete(&f, 0, 5.0, 1, 2, &mut rng), 5.0);
	}
}
