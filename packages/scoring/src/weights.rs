//! Per-hazard weight tables.
//!
//! Each table assigns every [`RiskParameter`] a fraction of the final score.
//! Fractions within a table sum to 1.0, so a weighted sum of 0-10 scores
//! stays on the 0-10 scale.

use climate_risk_scoring_models::{ClimateHazard, RiskParameter};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Weight fractions for one hazard, indexed by [`RiskParameter::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    hazard: ClimateHazard,
    weights: [f64; RiskParameter::COUNT],
}

impl RiskWeights {
    /// The hazard this table belongs to.
    #[must_use]
    pub const fn hazard(&self) -> ClimateHazard {
        self.hazard
    }

    /// Weight fraction (0-1) for `parameter`.
    #[must_use]
    pub const fn weight(&self, parameter: RiskParameter) -> f64 {
        self.weights[parameter.index()]
    }

    /// Weight as a percentage (0-100) for `parameter`.
    #[must_use]
    pub fn percentage(&self, parameter: RiskParameter) -> f64 {
        self.weight(parameter) * 100.0
    }

    /// Parameters paired with their fractions, in breakdown order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskParameter, f64)> + '_ {
        RiskParameter::all()
            .iter()
            .map(|&param| (param, self.weight(param)))
    }

    /// Sum of all fractions. 1.0 for every built-in table.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl Serialize for RiskWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RiskParameter::COUNT))?;
        for (param, weight) in self.iter() {
            map.serialize_entry(&param, &weight)?;
        }
        map.end()
    }
}

// Column order: NDVI, EVI, NDMI, LST, LSTAnomaly, totalRainfall,
// rainfallAnomaly, liftedIndex, CAPE, windShear, ETa, weatherAlerts.

/// Moisture and heat stress dominate.
pub const DROUGHT_WEIGHTS: RiskWeights = RiskWeights {
    hazard: ClimateHazard::Drought,
    weights: [
        0.10, 0.05, 0.20, 0.10, 0.15, 0.15, 0.10, 0.02, 0.02, 0.02, 0.07, 0.02,
    ],
};

/// Rainfall totals and anomalies dominate, with alerts as a secondary signal.
pub const HEAVY_RAINFALL_WEIGHTS: RiskWeights = RiskWeights {
    hazard: ClimateHazard::HeavyRainfall,
    weights: [
        0.03, 0.02, 0.10, 0.02, 0.03, 0.30, 0.20, 0.05, 0.05, 0.05, 0.05, 0.10,
    ],
};

/// Atmospheric instability dominates.
pub const HAILSTORM_WEIGHTS: RiskWeights = RiskWeights {
    hazard: ClimateHazard::Hailstorm,
    weights: [
        0.03, 0.03, 0.03, 0.10, 0.08, 0.07, 0.03, 0.15, 0.15, 0.15, 0.03, 0.15,
    ],
};

/// Returns the weight table for `hazard`.
#[must_use]
pub const fn weights_for(hazard: ClimateHazard) -> &'static RiskWeights {
    match hazard {
        ClimateHazard::Drought => &DROUGHT_WEIGHTS,
        ClimateHazard::HeavyRainfall => &HEAVY_RAINFALL_WEIGHTS,
        ClimateHazard::Hailstorm => &HAILSTORM_WEIGHTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_sums_to_one() {
        for hazard in ClimateHazard::all() {
            let total = weights_for(*hazard).total();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "{hazard} weights sum to {total}"
            );
        }
    }

    #[test]
    fn tables_are_keyed_by_their_hazard() {
        for hazard in ClimateHazard::all() {
            assert_eq!(weights_for(*hazard).hazard(), *hazard);
        }
    }

    #[test]
    fn weights_are_fractions() {
        for hazard in ClimateHazard::all() {
            for (param, weight) in weights_for(*hazard).iter() {
                assert!(
                    (0.0..=1.0).contains(&weight),
                    "{hazard} {param} weight {weight}"
                );
            }
        }
    }

    #[test]
    fn hailstorm_emphasizes_instability() {
        let hail = weights_for(ClimateHazard::Hailstorm);
        let instability = hail.weight(RiskParameter::Cape) + hail.weight(RiskParameter::LiftedIndex);
        assert!((instability - 0.30).abs() < 1e-9);
        for (param, weight) in hail.iter() {
            assert!(weight <= hail.weight(RiskParameter::Cape), "{param} outweighs CAPE");
        }
    }

    #[test]
    fn drought_emphasizes_moisture_and_heat() {
        let drought = weights_for(ClimateHazard::Drought);
        let ndmi = drought.weight(RiskParameter::Ndmi);
        let lst_anomaly = drought.weight(RiskParameter::LstAnomaly);
        for (param, weight) in drought.iter() {
            if param != RiskParameter::Ndmi {
                assert!(weight <= ndmi, "{param} outweighs NDMI");
            }
        }
        assert!(lst_anomaly >= drought.weight(RiskParameter::Lst));
    }

    #[test]
    fn serializes_as_parameter_map() {
        let json = serde_json::to_value(weights_for(ClimateHazard::Drought)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), RiskParameter::COUNT);
        assert!((obj["NDMI"].as_f64().unwrap() - 0.20).abs() < 1e-12);
    }
}
