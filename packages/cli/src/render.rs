//! Plain-text rendering of scores, breakdowns and weight tables.

use std::fmt::Write as _;

use climate_risk_profile_models::FarmProfile;
use climate_risk_scoring::{
    ClimateHazard, RiskCalculationResult, RiskParameter, risk_score_background_class,
    risk_score_color_class, weights_for,
};

/// Formats a calculation result as a summary line plus breakdown table.
#[must_use]
pub fn format_result(hazard: ClimateHazard, result: &RiskCalculationResult) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{hazard} risk: {:.1}/10 ({}) [{} {}]",
        result.final_score,
        result.risk_level,
        risk_score_color_class(result.final_score),
        risk_score_background_class(result.final_score),
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "{:<16} {:>12} {:<7} {:>6} {:>8} {:>9}",
        "PARAMETER", "VALUE", "UNIT", "SCORE", "WEIGHT", "WEIGHTED"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(63)).unwrap();

    for entry in &result.breakdown {
        writeln!(
            out,
            "{:<16} {:>12} {:<7} {:>6.1} {:>7.1}% {:>9.2}",
            entry.parameter.as_ref(),
            format_value(entry.parameter, entry.value),
            entry.parameter.unit(),
            entry.score,
            entry.weight,
            entry.weighted_score,
        )
        .unwrap();
    }

    out
}

/// Formats one or all hazard weight tables as percentages.
#[must_use]
pub fn format_weights(hazards: &[ClimateHazard]) -> String {
    let mut out = String::new();

    write!(out, "{:<16}", "PARAMETER").unwrap();
    for hazard in hazards {
        write!(out, " {:>15}", hazard.to_string()).unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "{}", "-".repeat(16 + hazards.len() * 16)).unwrap();

    for param in RiskParameter::all() {
        write!(out, "{:<16}", param.as_ref()).unwrap();
        for hazard in hazards {
            write!(out, " {:>14.1}%", weights_for(*hazard).percentage(*param)).unwrap();
        }
        writeln!(out).unwrap();
    }

    out
}

/// Formats the profile listing table.
#[must_use]
pub fn format_profiles(profiles: &[FarmProfile]) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{:<12} {:<18} {:<16} {:<10} {:>8} {:<15}",
        "ID", "NAME", "FARMER", "CROP", "HECTARES", "DEFAULT HAZARD"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(84)).unwrap();

    for profile in profiles {
        writeln!(
            out,
            "{:<12} {:<18} {:<16} {:<10} {:>8.1} {:<15}",
            profile.id,
            profile.name,
            profile.farmer,
            profile.crop,
            profile.area_hectares,
            profile.default_hazard.to_string(),
        )
        .unwrap();
    }

    out
}

fn format_value(parameter: RiskParameter, value: f64) -> String {
    match parameter {
        RiskParameter::WeatherAlerts => format!("{value:.0}"),
        RiskParameter::Ndvi | RiskParameter::Evi | RiskParameter::Ndmi => format!("{value:.2}"),
        _ => format!("{value:.1}"),
    }
}
