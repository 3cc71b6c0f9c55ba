//! Command argument validation utilities
//!
//! Clap checks argument counts; these rules check argument values before
//! any external call is made.

use crate::error::ClassroomError;
use anyhow::Result;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Argument is empty or whitespace only
    Empty { argument: String },
    /// Argument contains a character GitHub does not allow in that position
    InvalidCharacter {
        argument: String,
        value: String,
        character: char,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::Empty { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
            CommandValidationError::InvalidCharacter {
                argument,
                value,
                character,
            } => write!(
                f,
                "Invalid value '{}' for {}: '{}' is not allowed",
                value, argument, character
            ),
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to a usage error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    ClassroomError::Usage(error.to_string()).into()
}

/// Validate a classroom (organization) or assignment name
///
/// Both end up in repository paths, so they must be a single non-empty
/// path segment without whitespace.
pub fn validate_name(argument: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(validation_error_to_anyhow(CommandValidationError::Empty {
            argument: argument.to_string(),
        }));
    }

    if let Some(character) = value.chars().find(|c| c.is_whitespace() || *c == '/') {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidCharacter {
                argument: argument.to_string(),
                value: value.to_string(),
                character,
            },
        ));
    }

    Ok(())
}

/// Validate a template reference of the form `owner/name`
pub fn validate_template(template: &Option<String>) -> Result<()> {
    let Some(template) = template else {
        return Ok(());
    };

    match template.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            validate_name("template owner", owner)?;
            validate_name("template name", name)
        }
        _ => Err(ClassroomError::Usage(format!(
            "Template must look like 'owner/name', got '{}'",
            template
        ))
        .into()),
    }
}
