//! Interactive menu for scoring and editing farm profiles.
//!
//! Mirrors the dashboard flow: pick a profile, pick a hazard, see the score,
//! then optionally tweak parameters and rescore. Edits are written to the
//! parameter store after every change.

use climate_risk_profile::{ParameterStore, registry, resolve_parameters};
use climate_risk_profile_models::FarmProfile;
use climate_risk_scoring::{ClimateHazard, RiskParameter, calculate_risk_score};
use dialoguer::{Confirm, Input, Select};

use crate::render;

/// Actions offered after a profile has been scored.
enum ProfileAction {
    ChangeHazard,
    EditParameter,
    ResetParameters,
    Quit,
}

impl ProfileAction {
    const ALL: &[Self] = &[
        Self::ChangeHazard,
        Self::EditParameter,
        Self::ResetParameters,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ChangeHazard => "Change hazard",
            Self::EditParameter => "Edit a parameter",
            Self::ResetParameters => "Reset to default parameters",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the interactive scoring menu.
///
/// # Errors
///
/// Returns an error if a prompt fails or the parameter store cannot be
/// read or written.
pub fn run(store: &mut dyn ParameterStore) -> Result<(), Box<dyn std::error::Error>> {
    let profiles = registry::all_profiles();
    let labels: Vec<String> = profiles
        .iter()
        .map(|p| format!("{} - {} ({}, {})", p.id, p.name, p.farmer, p.crop))
        .collect();

    let idx = Select::new()
        .with_prompt("Select a farm profile")
        .items(&labels)
        .default(0)
        .interact()?;
    let profile = &profiles[idx];

    let mut hazard = select_hazard(profile.default_hazard)?;

    loop {
        show_score(store, profile, hazard)?;

        let action_labels: Vec<&str> = ProfileAction::ALL
            .iter()
            .map(ProfileAction::label)
            .collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&action_labels)
            .default(0)
            .interact()?;

        match ProfileAction::ALL[choice] {
            ProfileAction::ChangeHazard => hazard = select_hazard(hazard)?,
            ProfileAction::EditParameter => edit_parameter(store, profile)?,
            ProfileAction::ResetParameters => {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Discard all edits for {}?", profile.id))
                    .default(false)
                    .interact()?;
                if confirmed && store.remove(&profile.id)? {
                    println!("Restored default parameters.");
                }
            }
            ProfileAction::Quit => break,
        }
    }

    Ok(())
}

fn select_hazard(current: ClimateHazard) -> Result<ClimateHazard, Box<dyn std::error::Error>> {
    let hazards = ClimateHazard::all();
    let labels: Vec<String> = hazards.iter().map(ToString::to_string).collect();
    let default = hazards.iter().position(|h| *h == current).unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Select a climate hazard")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(hazards[idx])
}

fn show_score(
    store: &dyn ParameterStore,
    profile: &FarmProfile,
    hazard: ClimateHazard,
) -> Result<(), Box<dyn std::error::Error>> {
    let parameters = resolve_parameters(store, profile)?;
    let result = calculate_risk_score(&parameters, hazard);

    println!();
    println!("{} ({}, {})", profile.name, profile.farmer, profile.region);
    print!("{}", render::format_result(hazard, &result));
    println!();

    Ok(())
}

fn edit_parameter(
    store: &mut dyn ParameterStore,
    profile: &FarmProfile,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut parameters = resolve_parameters(store, profile)?;

    let params = RiskParameter::all();
    let labels: Vec<String> = params
        .iter()
        .map(|p| format!("{p} = {}", parameters.value(*p)))
        .collect();

    let idx = Select::new()
        .with_prompt("Parameter to edit")
        .items(&labels)
        .default(0)
        .interact()?;
    let parameter = params[idx];

    let value: f64 = Input::new()
        .with_prompt(format!("New {parameter} value"))
        .with_initial_text(parameters.value(parameter).to_string())
        .interact_text()?;

    if let Err(e) = parameters.set_value(parameter, value) {
        log::warn!("{e}");
        println!("{e}");
        return Ok(());
    }

    store.set(&profile.id, parameters)?;
    Ok(())
}
