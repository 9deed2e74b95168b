//! Canonical file paths for the local parameter cache.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CLIMATE_RISK_DATA_DIR";

/// File name of the JSON parameter cache inside the data directory.
pub const PARAMETERS_FILE: &str = "parameters.json";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`. Falls back to the
/// manifest directory itself if the expected layout is missing.
#[must_use]
pub fn project_root() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .map_or_else(|| manifest.to_path_buf(), Path::to_path_buf)
}

/// Returns the `data/` directory, or `$CLIMATE_RISK_DATA_DIR` when set.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map_or_else(|| project_root().join("data"), PathBuf::from)
}

/// Returns the default path of the per-profile parameter cache.
#[must_use]
pub fn parameters_path() -> PathBuf {
    data_dir().join(PARAMETERS_FILE)
}

/// Ensures a directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
