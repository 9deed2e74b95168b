//! Hazard-conditioned scoring of accumulated rainfall.
//!
//! The same rainfall total means opposite things for drought and flood risk,
//! so each hazard carries its own band table.

use climate_risk_scoring_models::ClimateHazard;

use crate::bands::{BandTable, ScoreBand};

/// More rain is safer.
pub const DROUGHT_RAINFALL_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_least(50.0, 0.0),
        ScoreBand::at_least(30.0, 2.0),
        ScoreBand::at_least(20.0, 4.0),
        ScoreBand::at_least(10.0, 6.0),
        ScoreBand::at_least(5.0, 8.0),
    ],
    10.0,
);

/// Up to 30 mm is safest; very dry scores slightly above that.
pub const HEAVY_RAINFALL_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::at_most(10.0, 2.0),
        ScoreBand::at_most(30.0, 0.0),
        ScoreBand::at_most(50.0, 4.0),
        ScoreBand::at_most(80.0, 6.0),
        ScoreBand::at_most(100.0, 8.0),
    ],
    10.0,
);

/// 10-30 mm is safest, risk grows in both directions and caps at 8.
pub const HAILSTORM_RAINFALL_BANDS: BandTable = BandTable::new(
    &[
        ScoreBand::between(10.0, 30.0, 0.0),
        ScoreBand::between(5.0, 50.0, 2.0),
        ScoreBand::between(2.0, 70.0, 4.0),
        ScoreBand::at_most(100.0, 6.0),
    ],
    8.0,
);

/// Returns the rainfall band table for `hazard`.
#[must_use]
pub const fn rainfall_bands(hazard: ClimateHazard) -> &'static BandTable {
    match hazard {
        ClimateHazard::Drought => &DROUGHT_RAINFALL_BANDS,
        ClimateHazard::HeavyRainfall => &HEAVY_RAINFALL_BANDS,
        ClimateHazard::Hailstorm => &HAILSTORM_RAINFALL_BANDS,
    }
}

/// Scores `totalRainfall` (mm) under the selected hazard.
#[must_use]
pub fn get_rainfall_score(value: f64, hazard: ClimateHazard) -> f64 {
    rainfall_bands(hazard).score(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_score(value: f64, hazard: ClimateHazard, expected: f64) {
        let actual = get_rainfall_score(value, hazard);
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "{value} mm under {hazard}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn same_rainfall_diverges_across_hazards() {
        assert_score(20.0, ClimateHazard::HeavyRainfall, 0.0);
        assert_score(20.0, ClimateHazard::Drought, 4.0);
        assert_score(20.0, ClimateHazard::Hailstorm, 0.0);
    }

    #[test]
    fn drought_bands() {
        for (value, expected) in [
            (60.0, 0.0),
            (50.0, 0.0),
            (40.0, 2.0),
            (25.0, 4.0),
            (10.0, 6.0),
            (5.0, 8.0),
            (4.9, 10.0),
            (0.0, 10.0),
        ] {
            assert_score(value, ClimateHazard::Drought, expected);
        }
    }

    #[test]
    fn heavy_rainfall_bands() {
        for (value, expected) in [
            (0.0, 2.0),
            (10.0, 2.0),
            (10.5, 0.0),
            (30.0, 0.0),
            (45.0, 4.0),
            (80.0, 6.0),
            (95.0, 8.0),
            (120.0, 10.0),
        ] {
            assert_score(value, ClimateHazard::HeavyRainfall, expected);
        }
    }

    #[test]
    fn hailstorm_bands_cap_at_eight() {
        for (value, expected) in [
            (10.0, 0.0),
            (30.0, 0.0),
            (7.0, 2.0),
            (45.0, 2.0),
            (3.0, 4.0),
            (65.0, 4.0),
            (1.0, 6.0),
            (90.0, 6.0),
            (150.0, 8.0),
        ] {
            assert_score(value, ClimateHazard::Hailstorm, expected);
        }
        assert!(HAILSTORM_RAINFALL_BANDS.scores().all(|s| s <= 8.0));
    }
}
