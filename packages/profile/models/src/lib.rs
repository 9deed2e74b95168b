#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Farm profile definition types.
//!
//! Defines the TOML schema for the demo farm profiles. Each profile carries
//! the default [`RiskParameters`] the dashboard starts from before the user
//! edits anything.

use climate_risk_scoring_models::{ClimateHazard, RiskParameters};
use serde::{Deserialize, Serialize};

/// A farm plot whose climate risk can be scored, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    /// Unique profile identifier (e.g., `"farmer-001"`), also the key used
    /// by parameter stores.
    pub id: String,
    /// Human-readable plot name.
    pub name: String,
    /// Name of the farmer who owns the plot.
    pub farmer: String,
    /// Administrative region the plot lies in.
    pub region: String,
    /// Primary crop grown on the plot.
    pub crop: String,
    /// Plot area in hectares.
    pub area_hectares: f64,
    /// Hazard the dashboard selects first for this plot.
    #[serde(default)]
    pub default_hazard: ClimateHazard,
    /// Starting parameter values.
    pub parameters: RiskParameters,
}
