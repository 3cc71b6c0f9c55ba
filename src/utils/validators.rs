//! Configuration validation utilities
//!
//! This module provides centralized validation logic for configuration values.

use crate::config::Config;
use crate::constants;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Permission is not one GitHub accepts for collaborators
    InvalidPermission(String),
    /// Listing limit must be positive
    ZeroListLimit,
    /// Update URL is not an http(s) URL
    InvalidUpdateUrl(String),
    /// Completion shell is not supported
    UnsupportedShell(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidPermission(permission) => write!(
                f,
                "Invalid permission '{}': expected one of {}",
                permission,
                constants::github::PERMISSIONS.join(", ")
            ),
            ValidationError::ZeroListLimit => write!(f, "list_limit must be greater than zero"),
            ValidationError::InvalidUpdateUrl(url) => {
                write!(f, "update_url must be an http(s) URL: '{}'", url)
            }
            ValidationError::UnsupportedShell(shell) => {
                write!(f, "Unsupported completion shell: '{}'", shell)
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(error) = validate_permission(&config.permission) {
        errors.push(error);
    }

    if config.list_limit == 0 {
        errors.push(ValidationError::ZeroListLimit);
    }

    if !config.update_url.starts_with("https://") && !config.update_url.starts_with("http://") {
        errors.push(ValidationError::InvalidUpdateUrl(config.update_url.clone()));
    }

    if config
        .completion_shell
        .parse::<clap_complete::Shell>()
        .is_err()
    {
        errors.push(ValidationError::UnsupportedShell(
            config.completion_shell.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a collaborator permission level
pub fn validate_permission(permission: &str) -> Result<(), ValidationError> {
    if constants::github::PERMISSIONS.contains(&permission) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPermission(permission.to_string()))
    }
}

/// Convert validation errors to anyhow::Error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
