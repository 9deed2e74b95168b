#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Risk parameter, hazard and score result types.
//!
//! This crate defines the data model shared by the scoring engine, the
//! profile store and the CLI. Wire names match the dashboard's JSON
//! (`NDVI`, `LSTAnomaly`, `totalRainfall`, ...) so stored parameter sets and
//! exported results stay readable by the web frontend.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The climate hazard a score is conditioned on.
///
/// Selects which weight table and which rainfall scoring branch apply.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ClimateHazard {
    /// Prolonged moisture deficit and heat stress
    #[default]
    Drought,
    /// Extreme precipitation and flooding
    #[serde(rename = "Heavy Rainfall", alias = "HeavyRainfall")]
    #[strum(
        to_string = "Heavy Rainfall",
        serialize = "HeavyRainfall",
        serialize = "heavy-rainfall",
        serialize = "heavy_rainfall"
    )]
    HeavyRainfall,
    /// Convective storms producing hail
    Hailstorm,
}

impl ClimateHazard {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Drought, Self::HeavyRainfall, Self::Hailstorm]
    }
}

/// Overall risk tier derived from a final score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RiskLevel {
    /// Score at or below [`RiskLevel::LOW_MAX`]
    Low,
    /// Score above [`RiskLevel::LOW_MAX`] and at or below [`RiskLevel::MEDIUM_MAX`]
    Medium,
    /// Score above [`RiskLevel::MEDIUM_MAX`]
    High,
}

impl RiskLevel {
    /// Highest score (inclusive) classified as [`RiskLevel::Low`].
    pub const LOW_MAX: f64 = 3.0;

    /// Highest score (inclusive) classified as [`RiskLevel::Medium`].
    pub const MEDIUM_MAX: f64 = 6.0;

    /// Classifies a 0-10 score.
    ///
    /// Boundaries belong to the lower tier: exactly `3.0` is `Low` and
    /// exactly `6.0` is `Medium`. Anything that fails both comparisons
    /// (including `NaN`) is `High`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= Self::LOW_MAX {
            Self::Low
        } else if score <= Self::MEDIUM_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Text color utility class used by the dashboard for this tier.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Low => "text-green-600",
            Self::Medium => "text-yellow-600",
            Self::High => "text-red-600",
        }
    }

    /// Background utility class used by the dashboard for this tier.
    #[must_use]
    pub const fn background_class(self) -> &'static str {
        match self {
            Self::Low => "bg-green-100",
            Self::Medium => "bg-yellow-100",
            Self::High => "bg-red-100",
        }
    }
}

/// Identifies one of the twelve scored parameters.
///
/// The `Display`/serde names are the dashboard's field names, which is also
/// what appears in a [`BreakdownEntry`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RiskParameter {
    #[serde(rename = "NDVI")]
    #[strum(serialize = "NDVI")]
    Ndvi,
    #[serde(rename = "EVI")]
    #[strum(serialize = "EVI")]
    Evi,
    #[serde(rename = "NDMI")]
    #[strum(serialize = "NDMI")]
    Ndmi,
    #[serde(rename = "LST")]
    #[strum(serialize = "LST")]
    Lst,
    #[serde(rename = "LSTAnomaly")]
    #[strum(serialize = "LSTAnomaly")]
    LstAnomaly,
    #[serde(rename = "totalRainfall")]
    #[strum(serialize = "totalRainfall")]
    TotalRainfall,
    #[serde(rename = "rainfallAnomaly")]
    #[strum(serialize = "rainfallAnomaly")]
    RainfallAnomaly,
    #[serde(rename = "liftedIndex")]
    #[strum(serialize = "liftedIndex")]
    LiftedIndex,
    #[serde(rename = "CAPE")]
    #[strum(serialize = "CAPE")]
    Cape,
    #[serde(rename = "windShear")]
    #[strum(serialize = "windShear")]
    WindShear,
    #[serde(rename = "ETa")]
    #[strum(serialize = "ETa")]
    Eta,
    #[serde(rename = "weatherAlerts")]
    #[strum(serialize = "weatherAlerts")]
    WeatherAlerts,
}

impl RiskParameter {
    /// Number of scored parameters.
    pub const COUNT: usize = 12;

    /// Returns all variants in breakdown order.
    #[must_use]
    pub const fn all() -> &'static [Self; Self::COUNT] {
        &[
            Self::Ndvi,
            Self::Evi,
            Self::Ndmi,
            Self::Lst,
            Self::LstAnomaly,
            Self::TotalRainfall,
            Self::RainfallAnomaly,
            Self::LiftedIndex,
            Self::Cape,
            Self::WindShear,
            Self::Eta,
            Self::WeatherAlerts,
        ]
    }

    /// Position of this parameter in [`RiskParameter::all`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit label shown next to raw values.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Ndvi | Self::Evi | Self::Ndmi => "",
            Self::Lst | Self::LstAnomaly | Self::LiftedIndex => "°C",
            Self::TotalRainfall | Self::RainfallAnomaly => "mm",
            Self::Cape => "J/kg",
            Self::WindShear => "m/s",
            Self::Eta => "mm/day",
            Self::WeatherAlerts => "alerts",
        }
    }
}

/// Error returned by [`RiskParameters::set_value`] when a value cannot be
/// represented by the target field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidParameterValueError {
    /// The parameter that was being set.
    pub parameter: RiskParameter,
    /// The rejected value.
    pub value: f64,
}

impl std::fmt::Display for InvalidParameterValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid value {} for {}: expected a non-negative whole number",
            self.value, self.parameter
        )
    }
}

impl std::error::Error for InvalidParameterValueError {}

/// Environmental and atmospheric inputs for a single risk calculation.
///
/// Values are not range-checked. Out-of-domain inputs (negative CAPE,
/// NDVI above 1) are scored by whichever band they fall into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    /// Normalized Difference Vegetation Index
    #[serde(rename = "NDVI")]
    pub ndvi: f64,
    /// Enhanced Vegetation Index
    #[serde(rename = "EVI")]
    pub evi: f64,
    /// Normalized Difference Moisture Index
    #[serde(rename = "NDMI")]
    pub ndmi: f64,
    /// Land surface temperature (°C)
    #[serde(rename = "LST")]
    pub lst: f64,
    /// Land surface temperature deviation from the seasonal norm (°C)
    #[serde(rename = "LSTAnomaly")]
    pub lst_anomaly: f64,
    /// Accumulated rainfall (mm)
    #[serde(rename = "totalRainfall")]
    pub total_rainfall: f64,
    /// Rainfall deviation from the seasonal norm (mm)
    #[serde(rename = "rainfallAnomaly")]
    pub rainfall_anomaly: f64,
    /// Lifted index (°C); more negative is less stable
    #[serde(rename = "liftedIndex")]
    pub lifted_index: f64,
    /// Convective available potential energy (J/kg)
    #[serde(rename = "CAPE")]
    pub cape: f64,
    /// Vertical wind shear (m/s)
    #[serde(rename = "windShear")]
    pub wind_shear: f64,
    /// Actual evapotranspiration (mm/day)
    #[serde(rename = "ETa")]
    pub eta: f64,
    /// Number of active weather alerts
    #[serde(rename = "weatherAlerts")]
    pub weather_alerts: u32,
}

impl RiskParameters {
    /// Returns the raw value of `parameter` as a float.
    #[must_use]
    pub fn value(&self, parameter: RiskParameter) -> f64 {
        match parameter {
            RiskParameter::Ndvi => self.ndvi,
            RiskParameter::Evi => self.evi,
            RiskParameter::Ndmi => self.ndmi,
            RiskParameter::Lst => self.lst,
            RiskParameter::LstAnomaly => self.lst_anomaly,
            RiskParameter::TotalRainfall => self.total_rainfall,
            RiskParameter::RainfallAnomaly => self.rainfall_anomaly,
            RiskParameter::LiftedIndex => self.lifted_index,
            RiskParameter::Cape => self.cape,
            RiskParameter::WindShear => self.wind_shear,
            RiskParameter::Eta => self.eta,
            RiskParameter::WeatherAlerts => f64::from(self.weather_alerts),
        }
    }

    /// Overwrites a single parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `parameter` is [`RiskParameter::WeatherAlerts`]
    /// and `value` is not a non-negative whole number that fits in a `u32`.
    pub fn set_value(
        &mut self,
        parameter: RiskParameter,
        value: f64,
    ) -> Result<(), InvalidParameterValueError> {
        let slot = match parameter {
            RiskParameter::Ndvi => &mut self.ndvi,
            RiskParameter::Evi => &mut self.evi,
            RiskParameter::Ndmi => &mut self.ndmi,
            RiskParameter::Lst => &mut self.lst,
            RiskParameter::LstAnomaly => &mut self.lst_anomaly,
            RiskParameter::TotalRainfall => &mut self.total_rainfall,
            RiskParameter::RainfallAnomaly => &mut self.rainfall_anomaly,
            RiskParameter::LiftedIndex => &mut self.lifted_index,
            RiskParameter::Cape => &mut self.cape,
            RiskParameter::WindShear => &mut self.wind_shear,
            RiskParameter::Eta => &mut self.eta,
            RiskParameter::WeatherAlerts => {
                self.weather_alerts = alerts_from_f64(value)
                    .ok_or(InvalidParameterValueError { parameter, value })?;
                return Ok(());
            }
        };
        *slot = value;
        Ok(())
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn alerts_from_f64(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// One row of the per-parameter contribution table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    /// Which parameter this row describes.
    pub parameter: RiskParameter,
    /// Raw input value, unmodified.
    pub value: f64,
    /// Normalized 0-10 score for the raw value.
    pub score: f64,
    /// Weight as a percentage (0-100).
    pub weight: f64,
    /// `score` multiplied by the weight as a fraction (0-1).
    pub weighted_score: f64,
}

/// Output of a single risk calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCalculationResult {
    /// Weighted total rounded to one decimal place, in `[0, 10]`.
    pub final_score: f64,
    /// Tier derived from `final_score`.
    pub risk_level: RiskLevel,
    /// One entry per [`RiskParameter`], in [`RiskParameter::all`] order.
    pub breakdown: Vec<BreakdownEntry>,
}
