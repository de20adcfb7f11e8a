//! Environment variable utilities for harmony-search
//!
//! Recorded runs are written below `$HARMONY_DIR/data_generated/records`.

use crate::constants::{DATA_GENERATED, HARMONY_DIR, RECORDS};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "HARMONY_DIR environment variable is not set. Please set it to the project root directory (e.g., export HARMONY_DIR=/path/to/project)"
    )]
    HarmonyDirNotSet,

    #[error("HARMONY_DIR points to a non-existent directory: {0}")]
    HarmonyDirNotFound(PathBuf),

    #[error("Failed to create directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, std::io::Error),
}

/// Get the HARMONY_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if HARMONY_DIR is not set or points to a non-existent
/// directory.
///
/// # Example
///
/// ```no_run
/// use harmony_env::env_utils::get_harmony_dir;
///
/// let root = get_harmony_dir()?;
/// println!("project root: {}", root.display());
/// # Ok::<(), harmony_env::env_utils::EnvError>(())
/// ```
pub fn get_harmony_dir() -> Result<PathBuf, EnvError> {
    resolve_harmony_dir(env::var_os(HARMONY_DIR))
}

/// Validate a HARMONY_DIR value
pub fn resolve_harmony_dir(value: Option<OsString>) -> Result<PathBuf, EnvError> {
    let path = PathBuf::from(value.ok_or(EnvError::HarmonyDirNotSet)?);
    if !path.is_dir() {
        return Err(EnvError::HarmonyDirNotFound(path));
    }
    Ok(path)
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .map_err(|e| EnvError::DirectoryCreationFailed(path.clone(), e))?;
    }
    Ok(path)
}

/// Path to `<root>/data_generated/records`, created if necessary
pub fn records_dir_under(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(root.join(DATA_GENERATED).join(RECORDS))
}

/// Get the path to the records subdirectory within data_generated
///
/// This is where `run_hs --record` writes its CSV histories when no output
/// directory is given.
pub fn get_records_dir() -> Result<PathBuf, EnvError> {
    records_dir_under(&get_harmony_dir()?)
}
