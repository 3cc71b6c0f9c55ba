//! Error kinds surfaced to the user
//!
//! Failures travel as `anyhow::Error`; the kinds below are attached where the
//! caller needs to tell them apart (exit handling in `main`, per-item
//! reporting inside the assignment loops).

use std::path::PathBuf;

/// Classified failures of the classroom workflows
#[derive(Debug, Clone, PartialEq)]
pub enum ClassroomError {
    /// A required external tool is absent or not authenticated
    PreconditionMissing { tool: String, reason: String },
    /// Wrong arguments for a command
    Usage(String),
    /// The roster file does not exist
    FileNotFound(PathBuf),
    /// A roster line could not be understood
    InvalidRoster { line: usize, reason: String },
    /// The hosting API failed for a reason other than "not found"
    RemoteLookupFailure { operation: String, message: String },
    /// The user declined the confirmation prompt
    UserCancelled,
    /// The published binary could not be retrieved
    FetchFailed(String),
}

impl std::fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassroomError::PreconditionMissing { tool, reason } => {
                write!(f, "'{}' is required: {}", tool, reason)
            }
            ClassroomError::Usage(message) => write!(f, "{}", message),
            ClassroomError::FileNotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
            ClassroomError::InvalidRoster { line, reason } => {
                write!(f, "Invalid roster line {}: {}", line, reason)
            }
            ClassroomError::RemoteLookupFailure { operation, message } => {
                write!(f, "{} failed: {}", operation, message)
            }
            ClassroomError::UserCancelled => write!(f, "Cancelled by user"),
            ClassroomError::FetchFailed(message) => {
                write!(f, "Failed to fetch update: {}", message)
            }
        }
    }
}

impl std::error::Error for ClassroomError {}

/// Find the classified kind of an error, if any
pub fn classify(error: &anyhow::Error) -> Option<&ClassroomError> {
    error.chain().find_map(|cause| cause.downcast_ref::<ClassroomError>())
}
