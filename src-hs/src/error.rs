//! Error types for the Harmony Search optimizer.
//!
//! Configuration and parameter-space problems are detected before any worker
//! starts; objective failures are reported with the index of the worker that
//! hit them.

use thiserror::Error;

use crate::objective::ObjectiveError;

/// Errors that can occur during a Harmony Search run.
#[derive(Debug, Error)]
pub enum HSError {
	/// The objective function reports no parameters.
	#[error("objective function has no parameters")]
	NoParameters,

	/// A lower bound exceeds its corresponding upper bound.
	#[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
	InvalidBounds {
		/// Index of the invalid parameter
		index: usize,
		/// The lower bound value
		lower: f64,
		/// The upper bound value
		upper: f64,
	},

	/// A discrete parameter has no allowed value.
	#[error("discrete parameter {index} has no allowed values")]
	EmptyDiscreteDomain {
		/// Index of the discrete parameter
		index: usize,
	},

	/// Harmony memory size must be at least 1.
	#[error("harmony memory size ({hms}) must be >= 1")]
	InvalidMemorySize {
		/// The invalid memory size
		hms: usize,
	},

	/// A probability (hmcr, par) is outside [0, 1].
	#[error("invalid {name}: {value} (must be in [0, 1])")]
	InvalidRate {
		/// Name of the rate
		name: &'static str,
		/// The invalid value
		value: f64,
	},

	/// Continuous pitch adjustment proportion is negative or not finite.
	#[error("invalid mpap: {mpap} (must be finite and >= 0)")]
	InvalidPitchAdjustment {
		/// The invalid proportion
		mpap: f64,
	},

	/// At least one worker is required.
	#[error("number of workers must be >= 1")]
	NoWorkers,

	/// Initial harmonies do not have `hms` rows of `num_parameters` values.
	#[error("initial harmonies shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
	InitialHarmoniesShape {
		/// Expected number of rows (hms)
		expected_rows: usize,
		/// Expected number of columns (parameters)
		expected_cols: usize,
		/// Actual rows
		rows: usize,
		/// Actual columns
		cols: usize,
	},

	/// An initial harmony value lies outside its parameter bounds.
	#[error("initial harmony {row}: value {value} for parameter {index} is out of bounds")]
	InitialHarmonyOutOfBounds {
		/// Row of the offending harmony
		row: usize,
		/// Parameter index
		index: usize,
		/// Offending value
		value: f64,
	},

	/// An initial harmony does not carry the fixed value of a fixed parameter.
	#[error("initial harmony {row}: fixed parameter {index} must be {expected}, got {value}")]
	InitialHarmonyFixedMismatch {
		/// Row of the offending harmony
		row: usize,
		/// Parameter index
		index: usize,
		/// The fixed value
		expected: f64,
		/// Offending value
		value: f64,
	},

	/// The objective function failed to evaluate a harmony.
	#[error(transparent)]
	Objective(#[from] ObjectiveError),

	/// A worker failed; the whole run fails with it.
	#[error("worker {worker} failed: {source}")]
	Worker {
		/// Index of the failed worker
		worker: usize,
		/// Underlying error
		#[source]
		source: Box<HSError>,
	},

	/// The rayon pool for the workers could not be created.
	#[error("failed to build worker pool: {0}")]
	ThreadPool(#[from] rayon::ThreadPoolBuildError),

	/// Configuration file could not be parsed.
	#[error("invalid configuration: {0}")]
	Config(#[from] serde_json::Error),

	/// History CSV could not be written.
	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	/// Filesystem error.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Harmony Search operations.
pub type Result<T> = std::result::Result<T, HSError>;

impl HSError {
	/// Returns `true` if the objective function describes an unusable parameter space.
	pub fn is_bounds_error(&self) -> bool {
		matches!(
			self,
			HSError::NoParameters
				| HSError::InvalidBounds { .. }
				| HSError::EmptyDiscreteDomain { .. }
		)
	}

	/// Returns `true` if this is a configuration-related error.
	pub fn is_config_error(&self) -> bool {
		matches!(
			self,
			HSError::InvalidMemorySize { .. }
				| HSError::InvalidRate { .. }
				| HSError::InvalidPitchAdjustment { .. }
				| HSError::NoWorkers
				| HSError::InitialHarmoniesShape { .. }
				| HSError::InitialHarmonyOutOfBounds { .. }
				| HSError::InitialHarmonyFixedMismatch { .. }
				| HSError::Config(_)
		)
	}

	/// Wrap this error with the index of the worker that produced it.
	pub(crate) fn in_worker(self, worker: usize) -> Self {
		HSError::Worker { worker, source: Box::new(self) }
	}
}
