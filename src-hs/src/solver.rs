use std::time::Instant;

use rayon::prelude::*;

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::objective::ObjectiveFunction;
use crate::parameter_space::ParameterSpace;
use crate::worker::{WorkerReport, run_worker, split_improvisations, worker_rng};
use crate::{HSConfig, HSReport};

/// Harmony Search optimizer
pub struct HarmonySearch<'a, O>
where
	O: ObjectiveFunction + ?Sized,
{
	objective: &'a O,
	config: HSConfig,
}

impl<'a, O> HarmonySearch<'a, O>
where
	O: ObjectiveFunction + ?Sized,
{
	/// Create a new optimizer for `objective` with the default configuration
	pub fn new(objective: &'a O) -> Self {
		Self { objective, config: HSConfig::default() }
	}

	pub fn with_config(objective: &'a O, config: HSConfig) -> Self {
		Self { objective, config }
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut HSConfig {
		&mut self.config
	}

	pub fn config(&self) -> &HSConfig {
		&self.config
	}

	/// Run all workers to completion and return the best harmony found.
	pub fn solve(&self) -> Result<HSReport> {
		let start = Instant::now();
		let config = &self.config;
		config.validate()?;

		// stream right after the workers' ones
		let mut rng = worker_rng(config.seed, config.num_workers);
		let space = ParameterSpace::from_objective(self.objective, &mut rng)?;
		if space.num_variable() == 0 {
			log::warn!("all {} parameters are fixed: nothing to search", space.len());
		}

		let shares = split_improvisations(config.max_imp, config.num_workers);
		log::info!(
			"HS start: {} parameters ({} variable), hms={}, max_imp={}, workers={}, per worker={:?}",
			space.len(),
			space.num_variable(),
			config.hms,
			config.max_imp,
			config.num_workers,
			shares
		);
		log::debug!(
			"HS rates: hmcr={:.3}, par={:.3}, mpap={:.3}, mpai={}, maximize={}",
			config.hmcr,
			config.par,
			config.mpap,
			config.mpai,
			config.maximize
		);

		let pool = rayon::ThreadPoolBuilder::new().num_threads(config.num_workers).build()?;
		let objective = self.objective;
		let results: Vec<Result<WorkerReport>> = pool.install(|| {
			shares
				.par_iter()
				.enumerate()
				.map(|(worker, &improvisations)| {
					run_worker(objective, &space, config, worker, improvisations)
				})
				.collect()
		});

		let (winner, workers) = aggregate(results, config.maximize)?;
		let best = &workers[winner].best;
		let report = HSReport {
			best_harmony: best.harmony.clone(),
			best_fitness: best.fitness,
			best_worker: best.worker,
			nfev: workers.iter().map(|w| w.nfev).sum(),
			elapsed: start.elapsed(),
			workers,
		};
		log::info!(
			"HS finished in {:.3} s: best={:.6e} (worker {}), nfev={}",
			report.elapsed.as_secs_f64(),
			report.best_fitness,
			report.best_worker,
			report.nfev
		);
		Ok(report)
	}
}

/// Convenience function: run Harmony Search on `objective` with `config`.
pub fn harmony_search<O>(objective: &O, config: HSConfig) -> Result<HSReport>
where
	O: ObjectiveFunction + ?Sized,
{
	HarmonySearch::with_config(objective, config).solve()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::HSConfigBuilder;
	use crate::error::HSError;
	use crate::functions::{AllFixed, Sphere};

	#[test]
	fn test_single_worker_seeded_runs_repeat() {
		let f = Sphere::new(3);
		let config = || HSConfigBuilder::new().max_imp(3000).hms(20).num_workers(1).seed(77).build();
		let a = harmony_search(&f, config()).unwrap();
		let b = harmony_search(&f, config()).unwrap();
		assert_eq!(a.best_fitness, b.best_fitness);
		assert_eq!(a.best_harmony, b.best_harmony);
	}

	#[test]
	fn test_report_shape() {
		let f = Sphere::new(4);
		let config = HSConfigBuilder::new().max_imp(1001).hms(10).num_workers(3).seed(5).build();
		let report = harmony_search(&f, config).unwrap();
		assert_eq!(report.workers.len(), 3);
		assert_eq!(report.best_harmony.len(), 4);
		assert_eq!(report.nfev, 1001 + 3 * 10);
		let shares: Vec<usize> = report.workers.iter().map(|w| w.improvisations).collect();
		assert_eq!(shares, vec![334, 334, 333]);
		for w in &report.workers {
			assert!(report.best_fitness <= w.best.fitness);
		}
		assert_eq!(report.harmony_memories().len(), 3);
	}

	#[test]
	fn test_all_fixed_completes() {
		let config = HSConfigBuilder::new().max_imp(100).hms(4).num_workers(2).seed(1).build();
		let report = harmony_search(&AllFixed, config).unwrap();
		assert_eq!(report.best_fitness, 2.75);
		assert_eq!(report.best_harmony, ndarray::array![0.5, -2.0]);
	}

	#[test]
	fn test_invalid_config_fails_before_running() {
		let config = HSConfigBuilder::new().hmcr(2.0).build();
		let err = harmony_search(&Sphere::new(2), config).unwrap_err();
		assert!(matches!(err, HSError::InvalidRate { .. }));
	}

	#[test]
	fn test_config_can_be_adjusted_before_solving() {
		let f = Sphere::new(2);
		let mut hs = HarmonySearch::new(&f);
		assert_eq!(hs.config().hms, 100);
		hs.config_mut().max_imp = 200;
		hs.config_mut().hms = 8;
		hs.config_mut().num_workers = 2;
		hs.config_mut().seed = Some(6);
		assert_eq!(hs.config().max_imp, 200);
		let report = hs.solve().unwrap();
		assert_eq!(report.nfev, 200 + 2 * 8);
	}

	#[test]
	fn test_dyn_objective() {
		let f: Box<dyn ObjectiveFunction> = Box::new(Sphere::new(2));
		let config = HSConfigBuilder::new().max_imp(500).hms(10).num_workers(2).seed(3).build();
		let report = HarmonySearch::with_config(f.as_ref(), config).solve().unwrap();
		assert!(report.best_fitness >= 0.0);
	}
}
