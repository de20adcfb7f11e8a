use ndarray::Array1;

use super::inverted_paraboloid;
use crate::objective::{ObjectiveError, ObjectiveFunction};

/// Two free continuous variables in [-1000, 1000]. Maximum 4 at (0, -1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Continuous;

impl ObjectiveFunction for Continuous {
	fn num_parameters(&self) -> usize {
		2
	}

	fn lower_bound(&self, _i: usize) -> f64 {
		-1000.0
	}

	fn upper_bound(&self, _i: usize) -> f64 {
		1000.0
	}

	fn fitness(&self, vector: &Array1<f64>) -> Result<f64, ObjectiveError> {
		Ok(inverted_paraboloid(vector[0], vector[1]))
	}
}
