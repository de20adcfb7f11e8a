use ndarray::Array1;
use rand::Rng;

use crate::HSConfig;
use crate::error::{HSError, Result};
use crate::harmony_memory::{Harmony, HarmonyMemory};
use crate::objective::ObjectiveFunction;
use crate::parameter_space::{ParameterKind, ParameterSpace};
use crate::pitch_adjust_continuous::pitch_adjust_continuous;
use crate::pitch_adjust_discrete::pitch_adjust_discrete;

/// Improvise one new harmony and evaluate it.
///
/// For every variable parameter, with probability `hmcr` the value is taken
/// from a uniformly chosen member of `memory` and then pitch adjusted with
/// probability `par`; otherwise a fresh random value is drawn. Fixed
/// parameters always carry their fixed value.
pub fn improvise<O, R>(
	objective: &O,
	space: &ParameterSpace,
	memory: &HarmonyMemory,
	config: &HSConfig,
	rng: &mut R,
) -> Result<Harmony>
where
	O: ObjectiveFunction + ?Sized,
	R: Rng,
{
	let n = space.len();
	if n == 0 {
		return Err(HSError::NoParameters);
	}
	let mut values = Array1::<f64>::zeros(n);
	for i in 0..n {
		let kind = space.kind(i);
		values[i] = if let ParameterKind::Fixed(v) = kind {
			v
		} else if rng.random::<f64>() < config.hmcr {
			let member = rng.random_range(0..memory.len());
			let value = memory.value(member, i);
			if rng.random::<f64>() < config.par {
				pitch_adjust(objective, kind, i, value, config, rng)
			} else {
				value
			}
		} else {
			space.random_value(objective, i, rng)
		};
	}
	let fitness = objective.fitness(&values)?;
	Ok(Harmony { values, fitness })
}

fn pitch_adjust<O, R>(
	objective: &O,
	kind: ParameterKind,
	i: usize,
	value: f64,
	config: &HSConfig,
	rng: &mut R,
) -> f64
where
	O: ObjectiveFunction + ?Sized,
	R: Rng,
{
	match kind {
		ParameterKind::Fixed(v) => v,
		ParameterKind::Continuous { lower, upper } => {
			pitch_adjust_continuous(value, lower, upper, config.mpap, rng)
		}
		ParameterKind::Discrete { count, .. } => {
			pitch_adjust_discrete(objective, i, value, count, config.mpai, rng)
		}
	}
}
