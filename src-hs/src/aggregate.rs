use crate::error::{HSError, Result};
use crate::harmony_memory::is_better;
use crate::worker::{WorkerBest, WorkerReport};

/// Index of the best entry, first one in worker order on ties.
pub fn select_best(bests: &[WorkerBest], maximize: bool) -> Option<usize> {
	let mut best: Option<usize> = None;
	for (i, candidate) in bests.iter().enumerate() {
		match best {
			Some(b) if !is_better(candidate.fitness, bests[b].fitness, maximize) => {}
			_ => best = Some(i),
		}
	}
	best
}

/// Reduce the worker results to the winning worker.
///
/// Any failed worker fails the whole run (the first failure in worker
/// order is returned). On success, returns the index of the winner within
/// the reports together with the reports.
pub fn aggregate(
	results: Vec<Result<WorkerReport>>,
	maximize: bool,
) -> Result<(usize, Vec<WorkerReport>)> {
	let reports = results.into_iter().collect::<Result<Vec<_>>>()?;
	let bests: Vec<WorkerBest> = reports.iter().map(|r| r.best.clone()).collect();
	let winner = select_best(&bests, maximize).ok_or(HSError::NoWorkers)?;
	Ok((winner, reports))
}
