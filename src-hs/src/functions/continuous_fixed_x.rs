use ndarray::Array1;
use rand::{Rng, RngCore};

use super::inverted_paraboloid;
use crate::objective::{ObjectiveError, ObjectiveFunction};

const LOWER: [f64; 2] = [-1000.0, -1000.0];
const UPPER: [f64; 2] = [1000.0, 1000.0];
const FIXED_X: f64 = 0.5;

/// Two continuous variables, x fixed at 0.5. Maximum 3.75 at (0.5, -1).
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuousFixedX;

impl ObjectiveFunction for ContinuousFixedX {
	fn num_parameters(&self) -> usize {
		LOWER.len()
	}

	fn lower_bound(&self, i: usize) -> f64 {
		LOWER[i]
	}

	fn upper_bound(&self, i: usize) -> f64 {
		UPPER[i]
	}

	fn is_variable(&self, i: usize) -> bool {
		i != 0
	}

	fn value(&self, i: usize, rng: &mut dyn RngCore) -> f64 {
		if i == 0 {
			return FIXED_X;
		}
		rng.random_range(LOWER[i]..=UPPER[i])
	}

	fn fitness(&self, vector: &Array1<f64>) -> Result<f64, ObjectiveError> {
		Ok(inverted_paraboloid(vector[0], vector[1]))
	}
}
