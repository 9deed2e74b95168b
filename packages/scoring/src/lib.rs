#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hazard-conditioned climate risk scoring.
//!
//! Converts a [`RiskParameters`] vector into a 0-10 score for a selected
//! [`ClimateHazard`]:
//!
//! 1. Each parameter is normalized onto 0-10 by an ordered band table
//!    ([`parameters`], with rainfall depending on the hazard in [`rainfall`]).
//! 2. Scores are weighted by the hazard's table in [`weights`] and summed.
//! 3. The sum is rounded to one decimal and classified into a [`RiskLevel`].
//!
//! Every function here is pure and total: any `f64` input produces a
//! result, nothing is cached, and inputs are never mutated.

pub mod bands;
pub mod parameters;
pub mod rainfall;
pub mod weights;

pub use climate_risk_scoring_models::{
    BreakdownEntry, ClimateHazard, RiskCalculationResult, RiskLevel, RiskParameter,
    RiskParameters,
};
pub use parameters::{
    get_cape_score, get_eta_score, get_evi_score, get_lifted_index_score,
    get_lst_anomaly_score, get_lst_score, get_ndmi_score, get_ndvi_score,
    get_rainfall_anomaly_score, get_weather_alerts_score, get_wind_shear_score,
};
pub use rainfall::get_rainfall_score;
pub use weights::{RiskWeights, weights_for};

/// Normalized 0-10 score of a single parameter under `hazard`.
///
/// Only `totalRainfall` actually depends on the hazard.
#[must_use]
pub fn score_parameter(
    parameter: RiskParameter,
    parameters: &RiskParameters,
    hazard: ClimateHazard,
) -> f64 {
    match parameter {
        RiskParameter::Ndvi => get_ndvi_score(parameters.ndvi),
        RiskParameter::Evi => get_evi_score(parameters.evi),
        RiskParameter::Ndmi => get_ndmi_score(parameters.ndmi),
        RiskParameter::Lst => get_lst_score(parameters.lst),
        RiskParameter::LstAnomaly => get_lst_anomaly_score(parameters.lst_anomaly),
        RiskParameter::TotalRainfall => get_rainfall_score(parameters.total_rainfall, hazard),
        RiskParameter::RainfallAnomaly => get_rainfall_anomaly_score(parameters.rainfall_anomaly),
        RiskParameter::LiftedIndex => get_lifted_index_score(parameters.lifted_index),
        RiskParameter::Cape => get_cape_score(parameters.cape),
        RiskParameter::WindShear => get_wind_shear_score(parameters.wind_shear),
        RiskParameter::Eta => get_eta_score(parameters.eta),
        RiskParameter::WeatherAlerts => get_weather_alerts_score(parameters.weather_alerts),
    }
}

/// Computes the weighted risk score and its breakdown.
///
/// Never fails. Out-of-domain values fall into whichever band matches them.
#[must_use]
pub fn calculate_risk_score(
    parameters: &RiskParameters,
    hazard: ClimateHazard,
) -> RiskCalculationResult {
    let weights = weights_for(hazard);

    let breakdown: Vec<BreakdownEntry> = weights
        .iter()
        .map(|(parameter, weight)| {
            let score = score_parameter(parameter, parameters, hazard);
            BreakdownEntry {
                parameter,
                value: parameters.value(parameter),
                score,
                weight: weight * 100.0,
                weighted_score: score * weight,
            }
        })
        .collect();

    let raw_total: f64 = breakdown.iter().map(|entry| entry.weighted_score).sum();
    let final_score = round_to_tenth(raw_total);
    let risk_level = RiskLevel::from_score(final_score);

    log::debug!(
        "calculate_risk_score: hazard={hazard} raw_total={raw_total:.4} final={final_score} level={risk_level}"
    );

    RiskCalculationResult {
        final_score,
        risk_level,
        breakdown,
    }
}

/// Text color class for a final score. Same tiers as [`RiskLevel::from_score`].
#[must_use]
pub fn risk_score_color_class(score: f64) -> &'static str {
    RiskLevel::from_score(score).color_class()
}

/// Background class for a final score. Same tiers as [`RiskLevel::from_score`].
#[must_use]
pub fn risk_score_background_class(score: f64) -> &'static str {
    RiskLevel::from_score(score).background_class()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_farm() -> RiskParameters {
        RiskParameters {
            ndvi: 0.7,
            evi: 0.5,
            ndmi: 0.3,
            lst: 26.0,
            lst_anomaly: -1.0,
            total_rainfall: 40.0,
            rainfall_anomaly: 10.0,
            lifted_index: 4.0,
            cape: 800.0,
            wind_shear: 12.0,
            eta: 3.0,
            weather_alerts: 0,
        }
    }

    fn hail_day() -> RiskParameters {
        RiskParameters {
            ndvi: 0.65,
            evi: 0.45,
            ndmi: 0.1,
            lst: 33.0,
            lst_anomaly: 3.2,
            total_rainfall: 45.0,
            rainfall_anomaly: 15.0,
            lifted_index: -6.0,
            cape: 2850.0,
            wind_shear: 22.4,
            eta: 5.1,
            weather_alerts: 2,
        }
    }

    fn extreme() -> RiskParameters {
        RiskParameters {
            ndvi: -1.0,
            evi: -1.0,
            ndmi: -1.0,
            lst: 60.0,
            lst_anomaly: 12.0,
            total_rainfall: 500.0,
            rainfall_anomaly: -200.0,
            lifted_index: -12.0,
            cape: 9000.0,
            wind_shear: 80.0,
            eta: 20.0,
            weather_alerts: 9,
        }
    }

    #[test]
    fn healthy_farm_under_drought_is_low() {
        let result = calculate_risk_score(&healthy_farm(), ClimateHazard::Drought);

        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!((result.final_score - 1.7).abs() < 1e-9, "{}", result.final_score);
        for entry in &result.breakdown {
            assert!(
                entry.score <= 2.0,
                "{} scored {} on a healthy farm",
                entry.parameter,
                entry.score
            );
        }
    }

    #[test]
    fn hail_instability_pushes_hailstorm_score_up() {
        let params = hail_day();
        let hail = calculate_risk_score(&params, ClimateHazard::Hailstorm);
        let drought = calculate_risk_score(&params, ClimateHazard::Drought);

        assert_eq!(hail.risk_level, RiskLevel::Medium);
        assert!((hail.final_score - 4.7).abs() < 1e-9, "{}", hail.final_score);
        assert!(hail.final_score > drought.final_score);

        let score_of = |param: RiskParameter| {
            hail.breakdown
                .iter()
                .find(|e| e.parameter == param)
                .map(|e| e.score)
                .unwrap()
        };
        assert!((score_of(RiskParameter::LiftedIndex) - 8.0).abs() < f64::EPSILON);
        assert!((score_of(RiskParameter::Cape) - 4.0).abs() < f64::EPSILON);
        assert!((score_of(RiskParameter::WindShear) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rainfall_component_follows_selected_hazard() {
        let mut params = healthy_farm();
        params.total_rainfall = 20.0;

        for (hazard, expected) in [
            (ClimateHazard::HeavyRainfall, 0.0),
            (ClimateHazard::Drought, 4.0),
            (ClimateHazard::Hailstorm, 0.0),
        ] {
            let result = calculate_risk_score(&params, hazard);
            let rain = result.breakdown[RiskParameter::TotalRainfall.index()];
            assert_eq!(rain.parameter, RiskParameter::TotalRainfall);
            assert!(
                (rain.score - expected).abs() < f64::EPSILON,
                "{hazard}: {}",
                rain.score
            );
        }
    }

    #[test]
    fn breakdown_covers_every_parameter_once() {
        for hazard in ClimateHazard::all() {
            let result = calculate_risk_score(&hail_day(), *hazard);
            assert_eq!(result.breakdown.len(), RiskParameter::COUNT);
            let params: Vec<RiskParameter> =
                result.breakdown.iter().map(|e| e.parameter).collect();
            assert_eq!(params.as_slice(), RiskParameter::all().as_slice());
        }
    }

    #[test]
    fn breakdown_entries_are_consistent() {
        let params = hail_day();
        for hazard in ClimateHazard::all() {
            let weights = weights_for(*hazard);
            let result = calculate_risk_score(&params, *hazard);
            for entry in &result.breakdown {
                assert!((entry.value - params.value(entry.parameter)).abs() < f64::EPSILON);
                assert!((entry.weight - weights.percentage(entry.parameter)).abs() < 1e-9);
                assert!(
                    (entry.weighted_score - entry.score * weights.weight(entry.parameter)).abs()
                        < 1e-12
                );
            }
        }
    }

    #[test]
    fn breakdown_weights_reconstruct_hazard_table() {
        for hazard in ClimateHazard::all() {
            let result = calculate_risk_score(&healthy_farm(), *hazard);
            let total: f64 = result.breakdown.iter().map(|e| e.weight).sum::<f64>() / 100.0;
            assert!((total - 1.0).abs() < 1e-9, "{hazard}: {total}");
            let weights = weights_for(*hazard);
            for entry in &result.breakdown {
                assert!((entry.weight / 100.0 - weights.weight(entry.parameter)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn final_score_is_bounded_and_has_one_decimal() {
        for params in [healthy_farm(), hail_day(), extreme()] {
            for hazard in ClimateHazard::all() {
                let score = calculate_risk_score(&params, *hazard).final_score;
                assert!((0.0..=10.0).contains(&score), "{hazard}: {score}");
                let scaled = score * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-9, "{hazard}: {score}");
            }
        }
    }

    #[test]
    fn extreme_inputs_score_high() {
        let result = calculate_risk_score(&extreme(), ClimateHazard::Drought);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.final_score > 6.0);
    }

    #[test]
    fn calculation_is_idempotent_and_does_not_mutate_input() {
        let params = hail_day();
        let snapshot = params;
        let first = calculate_risk_score(&params, ClimateHazard::Hailstorm);
        let second = calculate_risk_score(&params, ClimateHazard::Hailstorm);

        assert_eq!(params, snapshot);
        assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn non_finite_inputs_still_produce_a_result() {
        let mut params = healthy_farm();
        params.ndvi = f64::NAN;
        params.cape = f64::INFINITY;
        params.lst = f64::NEG_INFINITY;
        let result = calculate_risk_score(&params, ClimateHazard::Drought);
        assert!((0.0..=10.0).contains(&result.final_score));
        assert_eq!(result.breakdown.len(), RiskParameter::COUNT);
    }

    #[test]
    fn presentation_tiers_match_risk_level() {
        let mut score = 0.0_f64;
        while score <= 10.0 {
            let level = RiskLevel::from_score(score);
            assert_eq!(risk_score_color_class(score), level.color_class(), "{score}");
            assert_eq!(
                risk_score_background_class(score),
                level.background_class(),
                "{score}"
            );
            score = round_to_tenth(score + 0.1);
        }
    }

    #[test]
    fn presentation_boundaries_are_inclusive_on_lower_tier() {
        assert_eq!(risk_score_color_class(3.0), "text-green-600");
        assert_eq!(risk_score_background_class(3.0), "bg-green-100");
        assert_eq!(risk_score_color_class(3.1), "text-yellow-600");
        assert_eq!(risk_score_color_class(6.0), "text-yellow-600");
        assert_eq!(risk_score_background_class(6.0), "bg-yellow-100");
        assert_eq!(risk_score_color_class(6.1), "text-red-600");
        assert_eq!(risk_score_background_class(6.1), "bg-red-100");
    }

    #[test]
    fn result_serializes_with_dashboard_field_names() {
        let result = calculate_risk_score(&healthy_farm(), ClimateHazard::Drought);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["riskLevel"], "Low");
        assert_eq!(json["breakdown"][0]["parameter"], "NDVI");
        assert!(json["breakdown"][0].get("weightedScore").is_some());
        assert!(json.get("finalScore").is_some());
    }
}
