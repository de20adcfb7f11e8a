use ndarray::Array1;

use super::inverted_paraboloid;
use crate::objective::{ObjectiveError, ObjectiveFunction};

/// x takes the integers -100..=100, y is continuous in [-1000, 1000].
/// Maximum 4 at (0, -1).
///
/// Discrete values come from the default integer grid of [`ObjectiveFunction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteXContinuousY;

impl ObjectiveFunction for DiscreteXContinuousY {
	fn num_parameters(&self) -> usize {
		2
	}

	fn lower_bound(&self, i: usize) -> f64 {
		if i == 0 { -100.0 } else { -1000.0 }
	}

	fn upper_bound(&self, i: usize) -> f64 {
		if i == 0 { 100.0 } else { 1000.0 }
	}

	fn is_discrete(&self, i: usize) -> bool {
		i == 0
	}

	fn fitness(&self, vector: &Array1<f64>) -> Result<f64, ObjectiveError> {
		Ok(inverted_paraboloid(vector[0], vector[1]))
	}
}
