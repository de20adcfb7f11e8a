//! The objective function contract consumed by the optimizer.
//!
//! Implementors describe every parameter (bounds, fixed or variable,
//! continuous or discrete), generate random values for them and evaluate a
//! complete harmony. Only `num_parameters`, the bounds and `fitness` are
//! required; the remaining methods default to a fully variable, continuous
//! problem.

use ndarray::Array1;
use rand::{Rng, RngCore};
use thiserror::Error;

/// Failure reported by an objective function while evaluating a harmony.
#[derive(Debug, Clone, Error)]
#[error("objective evaluation failed: {message}")]
pub struct ObjectiveError {
	message: String,
}

impl ObjectiveError {
	/// Create an error carrying `message`.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}

	/// The failure message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// An objective function optimized by Harmony Search.
///
/// Instances are shared read-only between workers, hence `Send + Sync`.
pub trait ObjectiveFunction: Send + Sync {
	/// Number of parameters in a harmony.
	fn num_parameters(&self) -> usize;

	/// Lower bound of parameter `i`.
	fn lower_bound(&self, i: usize) -> f64;

	/// Upper bound of parameter `i`.
	fn upper_bound(&self, i: usize) -> f64;

	/// `false` when parameter `i` is fixed to the value returned by [`value`](Self::value).
	fn is_variable(&self, _i: usize) -> bool {
		true
	}

	/// `true` when parameter `i` takes one of a finite set of values.
	fn is_discrete(&self, _i: usize) -> bool {
		false
	}

	/// Number of allowed values of discrete parameter `i`.
	///
	/// Defaults to the integer grid `lower..=upper`.
	fn num_discrete_values(&self, i: usize) -> usize {
		if !self.is_discrete(i) {
			return 0;
		}
		let span = self.upper_bound(i) - self.lower_bound(i);
		if !span.is_finite() || span < 0.0 || span >= usize::MAX as f64 {
			return 0;
		}
		(span.floor() as usize).checked_add(1).unwrap_or(0)
	}

	/// Value at `index` of discrete parameter `i`. Values must ascend with the index.
	fn discrete_value(&self, i: usize, index: usize) -> f64 {
		self.lower_bound(i) + index as f64
	}

	/// Index of the allowed value of discrete parameter `i` closest to `value`.
	fn discrete_index(&self, i: usize, value: f64) -> usize {
		let n = self.num_discrete_values(i);
		if n == 0 {
			return 0;
		}
		// first index whose value is >= `value`
		let (mut lo, mut hi) = (0usize, n);
		while lo < hi {
			let mid = lo + (hi - lo) / 2;
			if self.discrete_value(i, mid) < value {
				lo = mid + 1;
			} else {
				hi = mid;
			}
		}
		if lo == n {
			return n - 1;
		}
		if lo > 0 {
			let below = value - self.discrete_value(i, lo - 1);
			let above = self.discrete_value(i, lo) - value;
			if below <= above {
				return lo - 1;
			}
		}
		lo
	}

	/// A value for parameter `i`.
	///
	/// Random for variable parameters: a uniformly chosen allowed value when
	/// discrete, uniform in `[lower, upper]` otherwise. Fixed parameters must
	/// override this to return their constant.
	fn value(&self, i: usize, rng: &mut dyn RngCore) -> f64 {
		if self.is_discrete(i) {
			let n = self.num_discrete_values(i);
			if n == 0 {
				return self.lower_bound(i);
			}
			return self.discrete_value(i, rng.random_range(0..n));
		}
		let (lower, upper) = (self.lower_bound(i), self.upper_bound(i));
		if lower < upper { rng.random_range(lower..=upper) } else { lower }
	}

	/// Evaluate a complete harmony.
	fn fitness(&self, vector: &Array1<f64>) -> Result<f64, ObjectiveError>;
}
