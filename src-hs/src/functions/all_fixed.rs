use ndarray::Array1;
use rand::RngCore;

use super::inverted_paraboloid;
use crate::objective::{ObjectiveError, ObjectiveFunction};

const FIXED: [f64; 2] = [0.5, -2.0];

/// Both parameters fixed at (0.5, -2): every harmony scores 2.75.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllFixed;

impl ObjectiveFunction for AllFixed {
	fn num_parameters(&self) -> usize {
		FIXED.len()
	}

	fn lower_bound(&self, _i: usize) -> f64 {
		-10.0
	}

	fn upper_bound(&self, _i: usize) -> f64 {
		10.0
	}

	fn is_variable(&self, _i: usize) -> bool {
		false
	}

	fn value(&self, i: usize, _rng: &mut dyn RngCore) -> f64 {
		FIXED[i]
	}

	fn fitness(&self, vector: &Array1<f64>) -> Result<f64, ObjectiveError> {
		Ok(inverted_paraboloid(vector[0], vector[1]))
	}
}
