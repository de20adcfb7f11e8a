//! Per-parameter descriptors resolved once from an objective function.

use rand::Rng;

use crate::error::{HSError, Result};
use crate::objective::ObjectiveFunction;

/// How a parameter is searched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterKind {
	/// Excluded from search; every harmony carries this value.
	Fixed(f64),
	/// Any value in `[lower, upper]`.
	Continuous { lower: f64, upper: f64 },
	/// One of `count` enumerated values addressed by index.
	Discrete { lower: f64, upper: f64, count: usize },
}

impl ParameterKind {
	pub fn is_fixed(&self) -> bool {
		matches!(self, ParameterKind::Fixed(_))
	}
}

/// Read-only view of all parameters of an objective function.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
	kinds: Vec<ParameterKind>,
}

impl ParameterSpace {
	/// Query `objective` for every parameter and validate the answers.
	///
	/// Fixed values are captured here, `rng` is only handed to
	/// [`ObjectiveFunction::value`] for them.
	pub fn from_objective<O, R>(objective: &O, rng: &mut R) -> Result<Self>
	where
		O: ObjectiveFunction + ?Sized,
		R: Rng,
	{
		let n = objective.num_parameters();
		if n == 0 {
			return Err(HSError::NoParameters);
		}
		let mut kinds = Vec::with_capacity(n);
		for i in 0..n {
			let lower = objective.lower_bound(i);
			let upper = objective.upper_bound(i);
			// NaN and infinite bounds, or a range that overflows, are unusable
			if !(lower <= upper) || !lower.is_finite() || !(upper - lower).is_finite() {
				return Err(HSError::InvalidBounds { index: i, lower, upper });
			}
			let kind = if !objective.is_variable(i) {
				ParameterKind::Fixed(objective.value(i, rng))
			} else if objective.is_discrete(i) {
				let count = objective.num_discrete_values(i);
				if count == 0 {
					return Err(HSError::EmptyDiscreteDomain { index: i });
				}
				ParameterKind::Discrete { lower, upper, count }
			} else {
				ParameterKind::Continuous { lower, upper }
			};
			kinds.push(kind);
		}
		Ok(Self { kinds })
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}

	pub fn kind(&self, i: usize) -> ParameterKind {
		self.kinds[i]
	}

	/// Number of parameters that take part in the search.
	pub fn num_variable(&self) -> usize {
		self.kinds.iter().filter(|k| !k.is_fixed()).count()
	}

	/// A fresh value for parameter `i`: the fixed value, or a random draw
	/// from the objective (clamped into bounds for continuous parameters).
	pub fn random_value<O, R>(&self, objective: &O, i: usize, rng: &mut R) -> f64
	where
		O: ObjectiveFunction + ?Sized,
		R: Rng,
	{
		match self.kinds[i] {
			ParameterKind::Fixed(v) => v,
			ParameterKind::Continuous { lower, upper } => {
				objective.value(i, rng).clamp(lower, upper)
			}
			ParameterKind::Discrete { .. } => objective.value(i, rng),
		}
	}

	/// Check that `value` is acceptable for parameter `i` of a starting harmony.
	pub(crate) fn check_initial_value(&self, row: usize, i: usize, value: f64) -> Result<()> {
		match self.kinds[i] {
			ParameterKind::Fixed(expected) => {
				if value != expected {
					return Err(HSError::InitialHarmonyFixedMismatch {
						row,
						index: i,
						expected,
						value,
					});
				}
			}
			ParameterKind::Continuous { lower, upper }
			| ParameterKind::Discrete { lower, upper, .. } => {
				if !(lower..=upper).contains(&value) {
					return Err(HSError::InitialHarmonyOutOfBounds { row, index: i, value });
				}
			}
		}
		Ok(())
	}
}
