use crate::utils::error::{Result, SearchError};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SearchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A catalog source is either an http(s) endpoint or a local file path.
pub fn validate_catalog_source(field_name: &str, source: &str) -> Result<()> {
    if source.starts_with("http://") || source.starts_with("https://") {
        validate_url(field_name, source)
    } else {
        validate_path(field_name, source)
    }
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    // URLs are parsed as JSON regardless of what the path looks like
    if file.starts_with("http://") || file.starts_with("https://") {
        return Ok(());
    }

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// Parse one `LENGTHxQTY` vehicle spec from the command line, e.g. `20x2`.
/// A bare `LENGTH` means quantity 1.
pub fn parse_vehicle_spec(field_name: &str, spec: &str) -> Result<(u32, u32)> {
    let pattern = Regex::new(r"^(\d+)(?:x(\d+))?$").expect("vehicle spec pattern is valid");

    let captures =
        pattern
            .captures(spec.trim())
            .ok_or_else(|| SearchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: spec.to_string(),
                reason: "Expected LENGTH or LENGTHxQTY, e.g. 20 or 20x2".to_string(),
            })?;

    let length: u32 = captures[1]
        .parse()
        .map_err(|_| SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: spec.to_string(),
            reason: "Vehicle length does not fit in 32 bits".to_string(),
        })?;

    let quantity: u32 = match captures.get(2) {
        Some(qty) => qty
            .as_str()
            .parse()
            .map_err(|_| SearchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: spec.to_string(),
                reason: "Vehicle quantity does not fit in 32 bits".to_string(),
            })?,
        None => 1,
    };

    if length == 0 {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: spec.to_string(),
            reason: "Vehicle length must be positive".to_string(),
        });
    }

    Ok((length, quantity))
}
