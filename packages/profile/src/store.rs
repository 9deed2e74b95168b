//! Per-profile parameter persistence.
//!
//! A [`ParameterStore`] remembers the last edited [`RiskParameters`] for each
//! profile id. It has plain get/set semantics: no history, no merging, and
//! the scoring engine is never aware of it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use climate_risk_scoring_models::RiskParameters;

use crate::{ProfileError, paths};

/// Key-value storage of parameter sets keyed by profile id.
pub trait ParameterStore {
    /// Returns the stored parameters for `profile_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the backing storage cannot be read.
    fn get(&self, profile_id: &str) -> Result<Option<RiskParameters>, ProfileError>;

    /// Stores `parameters` for `profile_id`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the backing storage cannot be written.
    fn set(&mut self, profile_id: &str, parameters: RiskParameters) -> Result<(), ProfileError>;

    /// Drops the stored parameters for `profile_id`. Returns whether anything
    /// was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the backing storage cannot be written.
    fn remove(&mut self, profile_id: &str) -> Result<bool, ProfileError>;
}

/// In-process store, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryParameterStore {
    entries: BTreeMap<String, RiskParameters>,
}

impl ParameterStore for MemoryParameterStore {
    fn get(&self, profile_id: &str) -> Result<Option<RiskParameters>, ProfileError> {
        Ok(self.entries.get(profile_id).copied())
    }

    fn set(&mut self, profile_id: &str, parameters: RiskParameters) -> Result<(), ProfileError> {
        self.entries.insert(profile_id.to_string(), parameters);
        Ok(())
    }

    fn remove(&mut self, profile_id: &str) -> Result<bool, ProfileError> {
        Ok(self.entries.remove(profile_id).is_some())
    }
}

/// Store backed by a single JSON object on disk, keyed by profile id.
///
/// The file is re-read on every access so several processes see each
/// other's edits. A missing file reads as an empty store and is created on
/// the first write.
#[derive(Debug, Clone)]
pub struct JsonFileParameterStore {
    path: PathBuf,
}

impl JsonFileParameterStore {
    /// Creates a store at `path`. Nothing is touched until the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at [`paths::parameters_path`].
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(paths::parameters_path())
    }

    /// Path of the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, RiskParameters>, ProfileError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, entries: &BTreeMap<String, RiskParameters>) -> Result<(), ProfileError> {
        if let Some(parent) = self.path.parent() {
            paths::ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;

        // Readers only ever see a complete file: the rename replaces it whole.
        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Sibling file that writes are staged in before replacing the cache.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl ParameterStore for JsonFileParameterStore {
    fn get(&self, profile_id: &str) -> Result<Option<RiskParameters>, ProfileError> {
        Ok(self.load()?.remove(profile_id))
    }

    fn set(&mut self, profile_id: &str, parameters: RiskParameters) -> Result<(), ProfileError> {
        let mut entries = self.load()?;
        entries.insert(profile_id.to_string(), parameters);
        self.save(&entries)?;
        log::info!(
            "Saved parameters for profile {profile_id} to {}",
            self.path.display()
        );
        Ok(())
    }

    fn remove(&mut self, profile_id: &str) -> Result<bool, ProfileError> {
        let mut entries = self.load()?;
        if entries.remove(profile_id).is_none() {
            return Ok(false);
        }
        self.save(&entries)?;
        log::info!("Cleared stored parameters for profile {profile_id}");
        Ok(true)
    }
}
