use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_catalog_source, Validate};

/// Configuration for the serverless surface, taken from the environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub listings_source: String,
    pub output_path: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            listings_source: std::env::var("LISTINGS_SOURCE")
                .unwrap_or_else(|_| "listings.json".to_string()),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or_else(|_| "/tmp".to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for LambdaConfig {
    fn listings_source(&self) -> &str {
        &self.listings_source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> &str {
        "json"
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_catalog_source("LISTINGS_SOURCE", &self.listings_source)
    }
}
