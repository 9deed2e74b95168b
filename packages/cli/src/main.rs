#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for scoring farm climate risk.
//!
//! ```text
//! climate_risk_cli profiles
//! climate_risk_cli score [--profile farmer-001] [--hazard hailstorm] [--params FILE] [--json]
//! climate_risk_cli weights [--hazard drought] [--json]
//! climate_risk_cli set --profile farmer-001 --parameter CAPE --value 3200
//! climate_risk_cli reset --profile farmer-001
//! ```
//!
//! Running with no subcommand enters interactive mode.

mod interactive;
mod render;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use climate_risk_profile::{
    JsonFileParameterStore, ParameterStore as _, load_parameters_file, registry,
    resolve_parameters,
};
use climate_risk_scoring::{
    ClimateHazard, RiskParameter, RiskWeights, calculate_risk_score, weights_for,
};

/// Profile scored when `--profile` is omitted.
const DEFAULT_PROFILE_ID: &str = "farmer-001";

#[derive(Parser)]
#[command(
    name = "climate_risk_cli",
    about = "Score agricultural climate risk for demo farm profiles"
)]
struct Cli {
    /// Path of the JSON parameter cache (defaults to `data/parameters.json`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo farm profiles
    Profiles,
    /// Score a profile's parameters for a hazard
    Score {
        /// Profile ID
        #[arg(long, default_value = DEFAULT_PROFILE_ID)]
        profile: String,
        /// Drought, heavy-rainfall or hailstorm (defaults to the profile's hazard)
        #[arg(long)]
        hazard: Option<ClimateHazard>,
        /// Score a TOML or JSON parameter file instead of the profile's parameters
        #[arg(long)]
        params: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show hazard weight tables
    Weights {
        /// Only show this hazard
        #[arg(long)]
        hazard: Option<ClimateHazard>,
        /// Print the weights as JSON fractions
        #[arg(long)]
        json: bool,
    },
    /// Edit one parameter of a profile and remember it
    Set {
        /// Profile ID
        #[arg(long)]
        profile: String,
        /// Parameter name (e.g. NDVI, totalRainfall, windShear)
        #[arg(long)]
        parameter: RiskParameter,
        /// New raw value
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
    },
    /// Forget edits and return a profile to its defaults
    Reset {
        /// Profile ID
        #[arg(long)]
        profile: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut store = cli
        .store
        .map_or_else(JsonFileParameterStore::at_default_path, JsonFileParameterStore::new);
    log::debug!("Using parameter store at {}", store.path().display());

    let Some(command) = cli.command else {
        return interactive::run(&mut store);
    };

    match command {
        Commands::Profiles => {
            print!("{}", render::format_profiles(&registry::all_profiles()));
        }
        Commands::Score {
            profile,
            hazard,
            params,
            json,
        } => {
            let profile = registry::find_profile(&profile)?;
            let hazard = hazard.unwrap_or(profile.default_hazard);
            let parameters = match params {
                Some(path) => load_parameters_file(&path)?,
                None => resolve_parameters(&store, &profile)?,
            };

            let result = calculate_risk_score(&parameters, hazard);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{} ({}, {})\n", profile.name, profile.farmer, profile.crop);
                print!("{}", render::format_result(hazard, &result));
            }
        }
        Commands::Weights { hazard, json } => {
            let hazards = hazard.map_or_else(|| ClimateHazard::all().to_vec(), |h| vec![h]);
            if json {
                let tables: BTreeMap<String, &RiskWeights> = hazards
                    .iter()
                    .map(|h| (h.to_string(), weights_for(*h)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&tables)?);
            } else {
                print!("{}", render::format_weights(&hazards));
            }
        }
        Commands::Set {
            profile,
            parameter,
            value,
        } => {
            let profile = registry::find_profile(&profile)?;
            let mut parameters = resolve_parameters(&store, &profile)?;
            parameters.set_value(parameter, value)?;
            store.set(&profile.id, parameters)?;
            println!("{}: {parameter} = {value}", profile.id);
        }
        Commands::Reset { profile } => {
            let profile = registry::find_profile(&profile)?;
            if store.remove(&profile.id)? {
                println!("Reset {} to default parameters", profile.id);
            } else {
                println!("{} has no stored edits", profile.id);
            }
        }
    }

    Ok(())
}
