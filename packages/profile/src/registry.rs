//! Compile-time registry of demo farm profiles.
//!
//! Each entry is a `(name, toml_content)` pair embedded via `include_str!`.
//! Adding a profile requires creating a TOML file in `profiles/` and adding
//! a corresponding entry here.

use climate_risk_profile_models::FarmProfile;

use crate::ProfileError;

/// Number of registered profiles. Enforced by a test.
#[cfg(test)]
const EXPECTED_PROFILE_COUNT: usize = 4;

/// Embedded TOML profile definitions.
const PROFILE_TOMLS: &[(&str, &str)] = &[
    ("farmer_001", include_str!("../profiles/farmer_001.toml")),
    ("farmer_002", include_str!("../profiles/farmer_002.toml")),
    ("farmer_003", include_str!("../profiles/farmer_003.toml")),
    ("farmer_004", include_str!("../profiles/farmer_004.toml")),
];

/// Returns all registered profiles.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught by the tests below.
#[must_use]
pub fn all_profiles() -> Vec<FarmProfile> {
    PROFILE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse profile '{name}': {e}"))
        })
        .collect()
}

/// Looks up a profile by its id.
///
/// # Errors
///
/// Returns [`ProfileError::UnknownProfile`] if no profile has that id.
pub fn find_profile(id: &str) -> Result<FarmProfile, ProfileError> {
    all_profiles()
        .into_iter()
        .find(|profile| profile.id == id)
        .ok_or_else(|| ProfileError::UnknownProfile(id.to_string()))
}
