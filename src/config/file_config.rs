use crate::config::validate_output_format;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_catalog_source, validate_file_extension, validate_path, Validate};
use serde::{Deserialize, Serialize};

/// Service configuration loaded from a TOML file, as an alternative to
/// command-line flags for deployments with a fixed setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub catalog: CatalogSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub monitoring: MonitoringSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Local .json/.csv file or http(s) endpoint
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_output_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringSection {
    #[serde(default)]
    pub enabled: bool,
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_output_format() -> String {
    "json".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: default_output_format(),
        }
    }
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for FileConfig {
    fn listings_source(&self) -> &str {
        &self.catalog.source
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_format(&self) -> &str {
        &self.output.format
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_catalog_source("catalog.source", &self.catalog.source)?;
        validate_file_extension("catalog.source", &self.catalog.source, &["json", "csv"])?;
        validate_path("output.path", &self.output.path)?;
        validate_output_format("output.format", &self.output.format)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [catalog]
            source = "listings.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listings_source(), "listings.json");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_format(), "json");
        assert!(!config.monitoring.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [catalog]
            source = "https://example.com/listings"

            [output]
            path = "/tmp/lot-search"
            format = "csv"

            [monitoring]
            enabled = true
            "#
        )
        .unwrap();

        let config = FileConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.listings_source(), "https://example.com/listings");
        assert_eq!(config.output_format(), "csv");
        assert!(config.monitoring.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_format_fails_validation() {
        let config: FileConfig = toml::from_str(
            r#"
            [catalog]
            source = "listings.json"

            [output]
            format = "parquet"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_catalog_section_fails_parse() {
        assert!(toml::from_str::<FileConfig>("[output]\npath = \"x\"\n").is_err());
    }
}
