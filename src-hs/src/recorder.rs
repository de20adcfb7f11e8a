//! CSV export of worker histories

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::worker::WorkerReport;

/// Write one CSV per worker, `<function_name>_worker<w>.csv`, under `output_dir`.
///
/// Columns: `improvisation,best_fitness,worst_fitness,accepted`. Returns the
/// written paths in worker order.
pub fn save_history_csv(
	function_name: &str,
	workers: &[WorkerReport],
	output_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
	let output_dir = output_dir.as_ref();
	create_dir_all(output_dir)?;

	let mut paths = Vec::with_capacity(workers.len());
	for report in workers {
		let path = output_dir.join(format!("{}_worker{}.csv", function_name, report.best.worker));
		let mut writer = csv::Writer::from_path(&path)?;
		if report.history.is_empty() {
			writer.write_record(["improvisation", "best_fitness", "worst_fitness", "accepted"])?;
		}
		for record in &report.history {
			writer.serialize(record)?;
		}
		writer.flush()?;
		log::debug!("saved {} history rows to {}", report.history.len(), path.display());
		paths.push(path);
	}
	Ok(paths)
}
