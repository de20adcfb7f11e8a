use ndarray::Array1;

use crate::objective::{ObjectiveError, ObjectiveFunction};

/// Sum of squares over `dim` continuous variables in [-5, 5], to minimize.
/// Minimum 0 at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
	pub dim: usize,
}

impl Sphere {
	pub fn new(dim: usize) -> Self {
		Self { dim }
	}
}

impl Default for Sphere {
	fn default() -> Self {
		Self::new(2)
	}
}

impl ObjectiveFunction for Sphere {
	fn num_parameters(&self) -> usize {
		self.dim
	}

	fn lower_bound(&self, _i: usize) -> f64 {
		-5.0
	}

	fn upper_bound(&self, _i: usize) -> f64 {
		5.0
	}

	fn fitness(&self, vector: &Array1<f64>) -> Result<f64, ObjectiveError> {
		Ok(vector.iter().map(|&xi| xi * xi).sum())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::functions::{AllFixed, ContinuousFixedX};

	#[test]
	fn test_fixture_values() {
		let x = Array1::from(vec![0.0, 0.0, 0.0]);
		assert_eq!(Sphere::new(3).fitness(&x).unwrap(), 0.0);

		let best = Array1::from(vec![0.5, -1.0]);
		assert_eq!(ContinuousFixedX.fitness(&best).unwrap(), 3.75);

		let fixed = Array1::from(vec![0.5, -2.0]);
		assert_eq!(AllFixed.fitness(&fixed).unwrap(), 2.75);
	}
}
