#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Demo farm profiles and per-profile parameter persistence.
//!
//! Supplies the scoring engine with its input: every profile starts from the
//! defaults embedded in [`registry`], and user edits are remembered per
//! profile by a [`ParameterStore`]. The engine itself never sees the store.

pub mod paths;
pub mod registry;
pub mod store;

use std::path::Path;

use climate_risk_profile_models::FarmProfile;
use climate_risk_scoring_models::RiskParameters;
use thiserror::Error;

pub use store::{JsonFileParameterStore, MemoryParameterStore, ParameterStore};

/// Errors from profile lookup and parameter persistence.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No embedded profile has the requested id.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML parameter file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Returns the parameters the dashboard should show for `profile`: the
/// stored edit if there is one, otherwise the profile's defaults.
///
/// # Errors
///
/// Returns [`ProfileError`] if the store cannot be read.
pub fn resolve_parameters(
    store: &dyn ParameterStore,
    profile: &FarmProfile,
) -> Result<RiskParameters, ProfileError> {
    if let Some(stored) = store.get(&profile.id)? {
        log::debug!("Using stored parameters for profile {}", profile.id);
        return Ok(stored);
    }
    Ok(profile.parameters)
}

/// Reads a standalone parameter set from disk.
///
/// Files ending in `.json` are parsed as JSON, anything else as TOML. Both
/// use the dashboard field names (`NDVI`, `totalRainfall`, ...).
///
/// # Errors
///
/// Returns [`ProfileError`] if the file cannot be read or parsed.
pub fn load_parameters_file(path: &Path) -> Result<RiskParameters, ProfileError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parameters = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::de::from_str(&contents)?
    };

    log::info!("Loaded parameters from {}", path.display());
    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use climate_risk_scoring_models::ClimateHazard;

    #[test]
    fn stored_edit_wins_over_defaults() {
        let profile = registry::find_profile("farmer-001").unwrap();
        let mut store = MemoryParameterStore::default();

        assert_eq!(
            resolve_parameters(&store, &profile).unwrap(),
            profile.parameters
        );

        let mut edited = profile.parameters;
        edited.cape = 4200.0;
        store.set(&profile.id, edited).unwrap();

        assert_eq!(resolve_parameters(&store, &profile).unwrap(), edited);
    }

    #[test]
    fn loads_toml_and_json_parameter_files() {
        let dir = tempfile::tempdir().unwrap();
        let profile = registry::find_profile("farmer-003").unwrap();

        let json_path = dir.path().join("params.json");
        std::fs::write(
            &json_path,
            serde_json::to_string(&profile.parameters).unwrap(),
        )
        .unwrap();
        assert_eq!(load_parameters_file(&json_path).unwrap(), profile.parameters);

        let toml_path = dir.path().join("params.toml");
        std::fs::write(
            &toml_path,
            "NDVI = 0.7\nEVI = 0.5\nNDMI = 0.3\nLST = 26.0\nLSTAnomaly = -1.0\n\
             totalRainfall = 40.0\nrainfallAnomaly = 10.0\nliftedIndex = 4.0\n\
             CAPE = 800.0\nwindShear = 12.0\nETa = 3.0\nweatherAlerts = 0\n",
        )
        .unwrap();
        let parsed = load_parameters_file(&toml_path).unwrap();
        assert_eq!(parsed, registry::find_profile("farmer-001").unwrap().parameters);

        let result = climate_risk_scoring::calculate_risk_score(&parsed, ClimateHazard::Drought);
        assert!((result.final_score - 1.7).abs() < 1e-9);
    }

    #[test]
    fn incomplete_parameter_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "NDVI = 0.7\n").unwrap();
        assert!(matches!(
            load_parameters_file(&path),
            Err(ProfileError::Toml(_))
        ));
    }
}
