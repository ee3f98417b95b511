use crate::utils::error::{DeployError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DeployError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

// Kubernetes 資源名稱必須是 DNS-1123 label
pub fn validate_resource_name(field_name: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Resource name cannot be empty".to_string(),
        });
    }

    if name.len() > 63 {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Resource name must be at most 63 characters".to_string(),
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Resource name can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(DeployError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Resource name cannot start or end with a hyphen".to_string(),
        });
    }

    Ok(())
}
