//! Harmony Search (HS) global optimizer in pure Rust using ndarray
//!
//! A population based metaheuristic: a harmony memory of `hms` evaluated
//! candidates is improved one improvisation at a time, each new harmony
//! replacing the worst member when it is strictly better.
//!
//! Supported features:
//! - Continuous, discrete (enumerated) and fixed parameters
//! - Maximization or minimization
//! - Memory consideration (`hmcr`) and pitch adjustment (`par`, `mpap`, `mpai`)
//! - Independent parallel workers, one private memory and RNG each, reduced
//!   to a single best harmony at the end
//! - Reproducible runs from a base seed
//! - Optional starting memory and per-worker history, recordable to CSV

#![allow(missing_docs)]
use std::fmt;
use std::path::Path;
use std::time::Duration;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

pub mod error;
pub mod objective;
pub mod parameter_space;

pub mod harmony_memory;
pub mod improvise;
pub mod pitch_adjust_continuous;
pub mod pitch_adjust_discrete;

pub mod aggregate;
pub mod worker;

pub mod function_registry;
pub mod functions;
pub mod recorder;
pub mod run_recorded;
pub mod solver;

pub use error::{HSError, Result};
pub use harmony_memory::{Harmony, HarmonyMemory};
pub use objective::{ObjectiveError, ObjectiveFunction};
pub use parameter_space::{ParameterKind, ParameterSpace};
pub use recorder::save_history_csv;
pub use run_recorded::run_recorded_harmony_search;
pub use solver::{HarmonySearch, harmony_search};
pub use worker::{HistoryRecord, WorkerBest, WorkerReport};

/// Configuration for the Harmony Search optimizer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HSConfig {
	/// Maximize the objective (minimize when false)
	pub maximize: bool,
	/// Total number of improvisations, shared by all workers
	pub max_imp: usize,
	/// Harmony memory size
	pub hms: usize,
	/// Harmony memory considering rate in [0, 1]
	pub hmcr: f64,
	/// Pitch adjusting rate in [0, 1]
	pub par: f64,
	/// Maximum pitch adjustment proportion of the range (continuous parameters)
	pub mpap: f64,
	/// Maximum pitch adjustment index (discrete parameters)
	pub mpai: usize,
	/// Number of independent workers
	pub num_workers: usize,
	pub seed: Option<u64>,
	/// Optional starting memory (hms x n) used by every worker
	pub initial_harmonies: Option<Array2<f64>>,
	/// Keep a per-worker history of the memory
	pub record_history: bool,
	/// History sampling period, in improvisations
	pub history_every: usize,
}

impl Default for HSConfig {
	fn default() -> Self {
		Self {
			maximize: false,
			max_imp: 50_000,
			hms: 100,
			hmcr: 0.75,
			par: 0.5,
			mpap: 0.25,
			mpai: 2,
			num_workers: num_cpus::get().max(1),
			seed: None,
			initial_harmonies: None,
			record_history: false,
			history_every: 100,
		}
	}
}

impl HSConfig {
	/// Check the values that do not depend on the objective function.
	pub fn validate(&self) -> Result<()> {
		if self.hms == 0 {
			return Err(HSError::InvalidMemorySize { hms: self.hms });
		}
		if !(0.0..=1.0).contains(&self.hmcr) {
			return Err(HSError::InvalidRate { name: "hmcr", value: self.hmcr });
		}
		if !(0.0..=1.0).contains(&self.par) {
			return Err(HSError::InvalidRate { name: "par", value: self.par });
		}
		if !self.mpap.is_finite() || self.mpap < 0.0 {
			return Err(HSError::InvalidPitchAdjustment { mpap: self.mpap });
		}
		if self.num_workers == 0 {
			return Err(HSError::NoWorkers);
		}
		Ok(())
	}

	/// Load a configuration from a JSON file; missing fields take their default.
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Ok(serde_json::from_str(&text)?)
	}
}

/// Fluent builder for `HSConfig`.
pub struct HSConfigBuilder {
	cfg: HSConfig,
}

impl Default for HSConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl HSConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: HSConfig::default() }
	}
	pub fn maximize(mut self, v: bool) -> Self {
		self.cfg.maximize = v;
		self
	}
	pub fn max_imp(mut self, v: usize) -> Self {
		self.cfg.max_imp = v;
		self
	}
	pub fn hms(mut self, v: usize) -> Self {
		self.cfg.hms = v;
		self
	}
	pub fn hmcr(mut self, v: f64) -> Self {
		self.cfg.hmcr = v;
		self
	}
	pub fn par(mut self, v: f64) -> Self {
		self.cfg.par = v;
		self
	}
	pub fn mpap(mut self, v: f64) -> Self {
		self.cfg.mpap = v;
		self
	}
	pub fn mpai(mut self, v: usize) -> Self {
		self.cfg.mpai = v;
		self
	}
	pub fn num_workers(mut self, v: usize) -> Self {
		self.cfg.num_workers = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn initial_harmonies(mut self, v: Array2<f64>) -> Self {
		self.cfg.initial_harmonies = Some(v);
		self
	}
	pub fn record_history(mut self, v: bool) -> Self {
		self.cfg.record_history = v;
		self
	}
	pub fn history_every(mut self, v: usize) -> Self {
		self.cfg.history_every = v;
		self
	}
	pub fn build(self) -> HSConfig {
		self.cfg
	}
}

/// Result/Report of a Harmony Search run
#[derive(Clone)]
pub struct HSReport {
	pub best_harmony: Array1<f64>,
	pub best_fitness: f64,
	/// Worker that found `best_harmony`
	pub best_worker: usize,
	/// Fitness evaluations over all workers
	pub nfev: usize,
	pub elapsed: Duration,
	/// One report per worker, in worker order
	pub workers: Vec<WorkerReport>,
}

impl HSReport {
	/// Final harmony memory of every worker.
	pub fn harmony_memories(&self) -> Vec<&HarmonyMemory> {
		self.workers.iter().map(|w| &w.memory).collect()
	}

	/// Recorded history of every worker (empty unless `record_history`).
	pub fn histories(&self) -> Vec<&[HistoryRecord]> {
		self.workers.iter().map(|w| w.history.as_slice()).collect()
	}
}

impl fmt::Debug for HSReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HSReport")
			.field("best_harmony", &format!("len={}", self.best_harmony.len()))
			.field("best_fitness", &self.best_fitness)
			.field("best_worker", &self.best_worker)
			.field("nfev", &self.nfev)
			.field("elapsed", &self.elapsed)
			.field("workers", &self.workers.len())
			.finish()
	}
}

#[cfg(test)]
mod config_tests {
	use super::*;

	#[test]
	fn test_defaults_are_valid() {
		let cfg = HSConfig::default();
		assert!(cfg.validate().is_ok());
		assert_eq!(cfg.hms, 100);
		assert_eq!(cfg.max_imp, 50_000);
		assert!(cfg.num_workers >= 1);
	}

	#[test]
	fn test_validate_rejects_bad_values() {
		let bad = HSConfigBuilder::new().hmcr(1.2).build();
		assert!(matches!(bad.validate(), Err(HSError::InvalidRate { name: "hmcr", .. })));
		let bad = HSConfigBuilder::new().par(-0.1).build();
		assert!(matches!(bad.validate(), Err(HSError::InvalidRate { name: "par", .. })));
		let bad = HSConfigBuilder::new().mpap(f64::NAN).build();
		assert!(matches!(bad.validate(), Err(HSError::InvalidPitchAdjustment { .. })));
		let bad = HSConfigBuilder::new().hms(0).build();
		assert!(bad.validate().unwrap_err().is_config_error());
		let bad = HSConfigBuilder::new().num_workers(0).build();
		assert!(matches!(bad.validate(), Err(HSError::NoWorkers)));
	}

	#[test]
	fn test_partial_json_uses_defaults() {
		let cfg: HSConfig =
			serde_json::from_str(r#"{"maximize": true, "hms": 20, "seed": 7}"#).unwrap();
		assert!(cfg.maximize);
		assert_eq!(cfg.hms, 20);
		assert_eq!(cfg.seed, Some(7));
		assert_eq!(cfg.hmcr, 0.75);
		assert_eq!(cfg.mpai, 2);
	}

	#[test]
	fn test_from_json_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("hs.json");
		std::fs::write(&path, r#"{"max_imp": 1000, "num_workers": 2}"#).unwrap();
		let cfg = HSConfig::from_json_file(&path).unwrap();
		assert_eq!(cfg.max_imp, 1000);
		assert_eq!(cfg.num_workers, 2);

		std::fs::write(&path, "{not json").unwrap();
		let err = HSConfig::from_json_file(&path).unwrap_err();
		assert!(matches!(err, HSError::Config(_)));
	}
}
