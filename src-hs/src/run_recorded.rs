//! Recording wrapper around Harmony Search for testing and analysis

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::objective::ObjectiveFunction;
use crate::recorder::save_history_csv;
use crate::{HSConfig, HSReport, harmony_search};

/// Run Harmony Search with history recording enabled and save one CSV per
/// worker under `output_dir`.
pub fn run_recorded_harmony_search<O>(
	function_name: &str,
	objective: &O,
	mut config: HSConfig,
	output_dir: impl AsRef<Path>,
) -> Result<(HSReport, Vec<PathBuf>)>
where
	O: ObjectiveFunction + ?Sized,
{
	config.record_history = true;
	let report = harmony_search(objective, config)?;
	let csv_paths = save_history_csv(function_name, &report.workers, output_dir)?;
	Ok((report, csv_paths))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::HSConfigBuilder;
	use crate::functions::Continuous;

	#[test]
	fn test_run_recorded_basic() {
		let dir = tempfile::tempdir().unwrap();
		let config = HSConfigBuilder::new()
			.maximize(true)
			.max_imp(4000)
			.hms(30)
			.num_workers(2)
			.seed(42)
			.history_every(500)
			.build();

		let result = run_recorded_harmony_search("continuous", &Continuous, config, dir.path());
		assert!(result.is_ok());
		let (report, csv_paths) = result.unwrap();

		assert_eq!(csv_paths.len(), 2);
		for path in &csv_paths {
			assert!(path.exists());
		}
		for history in report.histories() {
			assert_eq!(history.first().map(|h| h.improvisation), Some(0));
			assert_eq!(history.last().map(|h| h.improvisation), Some(2000));
		}
		assert!(report.best_fitness <= 4.0);
	}
}
