pub mod cli;
pub mod file_config;
#[cfg(feature = "lambda")]
pub mod lambda;

use crate::domain::model::VehicleRequest;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{
    parse_vehicle_spec, validate_catalog_source, validate_file_extension, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lot-search")]
#[command(about = "Rank storage locations by the cheapest listing combination that fits a set of vehicles")]
pub struct CliConfig {
    /// Listing catalog: local .json/.csv file or http(s) endpoint
    #[arg(long, default_value = "listings.json")]
    pub listings: String,

    /// Vehicles to place, as LENGTH or LENGTHxQTY (e.g. 25 or 20x2)
    #[arg(long, value_delimiter = ',')]
    pub vehicle: Vec<String>,

    /// JSON request file with [{"length": .., "quantity": ..}, ...]
    #[arg(long)]
    pub request: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Result format, json or csv
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Optional TOML service config; overrides catalog/output flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Assemble the demand from the request file if given, otherwise from
    /// the --vehicle flags.
    pub fn demand(&self) -> Result<Vec<VehicleRequest>> {
        if let Some(request_path) = &self.request {
            let data = std::fs::read(request_path)?;
            let requests: Vec<VehicleRequest> = serde_json::from_slice(&data)?;
            return Ok(requests);
        }

        self.vehicle
            .iter()
            .map(|spec| {
                parse_vehicle_spec("vehicle", spec).map(|(length, quantity)| VehicleRequest {
                    length,
                    quantity,
                })
            })
            .collect()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn listings_source(&self) -> &str {
        &self.listings
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> &str {
        &self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_catalog_source("listings", &self.listings)?;
        validate_file_extension("listings", &self.listings, &["json", "csv"])?;
        validate_path("output_path", &self.output_path)?;
        validate_output_format("format", &self.format)?;

        for spec in &self.vehicle {
            parse_vehicle_spec("vehicle", spec)?;
        }
        if let Some(request_path) = &self.request {
            validate_path("request", request_path)?;
            if !self.vehicle.is_empty() {
                return Err(SearchError::InvalidConfigValueError {
                    field: "request".to_string(),
                    value: request_path.clone(),
                    reason: "Cannot combine --request with --vehicle".to_string(),
                });
            }
        }
        if let Some(config_path) = &self.config {
            validate_path("config", config_path)?;
            validate_file_extension("config", config_path, &["toml"])?;
        }

        Ok(())
    }
}

pub(crate) fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    match format {
        "json" | "csv" => Ok(()),
        other => Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: other.to_string(),
            reason: "Supported formats: json, csv".to_string(),
        }),
    }
}
