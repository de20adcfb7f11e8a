//! One independent search: a private harmony memory improved for a fixed
//! number of improvisations with a worker-owned random generator.

use std::fmt;

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::HSConfig;
use crate::error::Result;
use crate::harmony_memory::HarmonyMemory;
use crate::improvise::improvise;
use crate::objective::ObjectiveFunction;
use crate::parameter_space::ParameterSpace;

/// Best harmony found by one worker.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerBest {
	pub worker: usize,
	pub harmony: Array1<f64>,
	pub fitness: f64,
}

/// Snapshot of a harmony memory during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryRecord {
	/// Improvisations done so far (0 = right after initialization)
	pub improvisation: usize,
	pub best_fitness: f64,
	pub worst_fitness: f64,
	/// Whether the last improvisation replaced a member
	pub accepted: bool,
}

impl HistoryRecord {
	fn snapshot(improvisation: usize, memory: &HarmonyMemory, accepted: bool) -> Self {
		Self {
			improvisation,
			best_fitness: memory.best_fitness(),
			worst_fitness: memory.worst_fitness(),
			accepted,
		}
	}
}

/// Everything a worker hands back at the end of its run.
#[derive(Clone)]
pub struct WorkerReport {
	pub best: WorkerBest,
	/// Improvisations assigned to (and performed by) this worker
	pub improvisations: usize,
	/// Improvisations that replaced the worst member
	pub accepted: usize,
	/// Fitness evaluations, initialization included
	pub nfev: usize,
	pub memory: HarmonyMemory,
	pub history: Vec<HistoryRecord>,
}

impl fmt::Debug for WorkerReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WorkerReport")
			.field("worker", &self.best.worker)
			.field("fitness", &self.best.fitness)
			.field("improvisations", &self.improvisations)
			.field("accepted", &self.accepted)
			.field("nfev", &self.nfev)
			.field("memory", &format!("{}x{}", self.memory.len(), self.memory.num_parameters()))
			.field("history", &format!("len={}", self.history.len()))
			.finish()
	}
}

/// Split `max_imp` improvisations over `num_workers` workers.
///
/// Every worker gets `max_imp / num_workers`; the remainder goes one by one
/// to the first workers, so the shares always add up to `max_imp`.
pub fn split_improvisations(max_imp: usize, num_workers: usize) -> Vec<usize> {
	if num_workers == 0 {
		return Vec::new();
	}
	let share = max_imp / num_workers;
	let remainder = max_imp % num_workers;
	(0..num_workers).map(|w| share + usize::from(w < remainder)).collect()
}

/// Random generator owned by `worker`.
///
/// Seeded runs derive a distinct stream per worker from the base seed;
/// unseeded runs draw fresh entropy for every worker.
pub fn worker_rng(seed: Option<u64>, worker: usize) -> StdRng {
	match seed {
		Some(base_seed) => StdRng::seed_from_u64(base_seed.wrapping_add((worker as u64) << 32)),
		None => {
			let mut thread_rng = rand::rng();
			StdRng::from_rng(&mut thread_rng)
		}
	}
}

/// Run worker `worker` for `improvisations` improvisations.
///
/// Errors are tagged with the worker index.
pub fn run_worker<O>(
	objective: &O,
	space: &ParameterSpace,
	config: &HSConfig,
	worker: usize,
	improvisations: usize,
) -> Result<WorkerReport>
where
	O: ObjectiveFunction + ?Sized,
{
	drive(objective, space, config, worker, improvisations).map_err(|e| e.in_worker(worker))
}

fn drive<O>(
	objective: &O,
	space: &ParameterSpace,
	config: &HSConfig,
	worker: usize,
	improvisations: usize,
) -> Result<WorkerReport>
where
	O: ObjectiveFunction + ?Sized,
{
	let mut rng = worker_rng(config.seed, worker);
	let mut memory = match &config.initial_harmonies {
		Some(harmonies) => {
			HarmonyMemory::from_harmonies(objective, space, harmonies, config.hms, config.maximize)?
		}
		None => HarmonyMemory::initialize(objective, space, config.hms, config.maximize, &mut rng)?,
	};
	let mut nfev = memory.len();
	let mut accepted = 0usize;
	let mut history = Vec::new();
	if config.record_history {
		history.push(HistoryRecord::snapshot(0, &memory, false));
	}

	for imp in 1..=improvisations {
		let candidate = improvise(objective, space, &memory, config, &mut rng)?;
		nfev += 1;
		let replaced = memory.replace_worst(candidate);
		if replaced {
			accepted += 1;
		}
		if config.record_history
			&& ((config.history_every > 0 && imp % config.history_every == 0)
				|| imp == improvisations)
		{
			history.push(HistoryRecord::snapshot(imp, &memory, replaced));
		}
	}

	let best = memory.best();
	log::debug!(
		"worker {worker}: {improvisations} improvisations, {accepted} accepted, best={:.6e}",
		best.fitness
	);
	Ok(WorkerReport {
		best: WorkerBest { worker, harmony: best.values, fitness: best.fitness },
		improvisations,
		accepted,
		nfev,
		memory,
		history,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::HSConfigBuilder;
	use crate::error::HSError;
	use crate::functions::{ContinuousFixedX, Sphere};
	use crate::objective::ObjectiveError;
	use rand::Rng;

	fn space_of<O: ObjectiveFunction>(f: &O) -> ParameterSpace {
		ParameterSpace::from_objective(f, &mut StdRng::seed_from_u64(0)).unwrap()
	}

	#[test]
	fn test_split_improvisations_distributes_remainder() {
		assert_eq!(split_improvisations(10, 3), vec![4, 3, 3]);
		assert_eq!(split_improvisations(50000, 8), vec![6250; 8]);
		assert_eq!(split_improvisations(2, 4), vec![1, 1, 0, 0]);
		assert_eq!(split_improvisations(7, 1), vec![7]);
		assert!(split_improvisations(7, 0).is_empty());
		assert_eq!(split_improvisations(12345, 7).iter().sum::<usize>(), 12345);
	}

	#[test]
	fn test_worker_rng_streams() {
		let a: f64 = worker_rng(Some(9), 0).random();
		let b: f64 = worker_rng(Some(9), 0).random();
		let c: f64 = worker_rng(Some(9), 1).random();
		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[test]
	fn test_run_worker_counts() {
		let f = Sphere::new(3);
		let config =
			HSConfigBuilder::new().hms(10).seed(1).record_history(true).history_every(25).build();
		let report = run_worker(&f, &space_of(&f), &config, 2, 100).unwrap();
		assert_eq!(report.best.worker, 2);
		assert_eq!(report.best.harmony.len(), 3);
		assert_eq!(report.improvisations, 100);
		assert_eq!(report.nfev, 110);
		assert!(report.accepted <= 100);
		assert_eq!(report.best.fitness, report.memory.best_fitness());
		let steps: Vec<usize> = report.history.iter().map(|h| h.improvisation).collect();
		assert_eq!(steps, vec![0, 25, 50, 75, 100]);
	}

	#[test]
	fn test_history_best_is_monotonic() {
		let f = ContinuousFixedX;
		let config = HSConfigBuilder::new()
			.maximize(true)
			.hms(20)
			.seed(4)
			.record_history(true)
			.history_every(1)
			.build();
		let report = run_worker(&f, &space_of(&f), &config, 0, 2000).unwrap();
		assert_eq!(report.history.len(), 2001);
		for pair in report.history.windows(2) {
			assert!(pair[1].best_fitness >= pair[0].best_fitness);
			assert!(pair[1].worst_fitness >= pair[0].worst_fitness);
		}
	}

	#[test]
	fn test_zero_improvisations_reports_initial_best() {
		let f = Sphere::new(2);
		let config = HSConfigBuilder::new().hms(5).seed(2).build();
		let report = run_worker(&f, &space_of(&f), &config, 0, 0).unwrap();
		assert_eq!(report.nfev, 5);
		assert_eq!(report.accepted, 0);
		assert!(report.history.is_empty());
	}

	/// Undefined above 0.9.
	struct NanAbove;

	impl ObjectiveFunction for NanAbove {
		fn num_parameters(&self) -> usize {
			1
		}
		fn lower_bound(&self, _i: usize) -> f64 {
			0.0
		}
		fn upper_bound(&self, _i: usize) -> f64 {
			1.0
		}
		fn fitness(&self, vector: &Array1<f64>) -> std::result::Result<f64, ObjectiveError> {
			Ok(if vector[0] > 0.9 { f64::NAN } else { vector[0] })
		}
	}

	#[test]
	fn test_nan_fitness_does_not_stall_memory() {
		let f = NanAbove;
		let initial = ndarray::array![[0.95], [0.2], [0.1]];
		let config = HSConfigBuilder::new()
			.maximize(true)
			.hms(3)
			.seed(1)
			.initial_harmonies(initial)
			.build();
		let report = run_worker(&f, &space_of(&f), &config, 0, 2000).unwrap();
		assert!(report.accepted > 0);
		assert!(!report.best.fitness.is_nan());
		assert!(report.best.fitness > 0.8);
		assert!(report.memory.fitness().iter().all(|v| !v.is_nan()));
	}

	struct Failing;

	impl ObjectiveFunction for Failing {
		fn num_parameters(&self) -> usize {
			1
		}
		fn lower_bound(&self, _i: usize) -> f64 {
			0.0
		}
		fn upper_bound(&self, _i: usize) -> f64 {
			1.0
		}
		fn fitness(&self, vector: &Array1<f64>) -> std::result::Result<f64, ObjectiveError> {
			if vector[0] > 0.5 { Err(ObjectiveError::new("too high")) } else { Ok(vector[0]) }
		}
	}

	#[test]
	fn test_objective_failure_is_tagged_with_worker() {
		let f = Failing;
		let config = HSConfigBuilder::new().hms(50).seed(3).build();
		let err = run_worker(&f, &space_of(&f), &config, 5, 10).unwrap_err();
		match err {
			HSError::Worker { worker, source } => {
				assert_eq!(worker, 5);
				assert!(matches!(*source, HSError::Objective(_)));
			}
			other => panic!("unexpected error: {other}"),
		}
	}
}
