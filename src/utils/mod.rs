//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;
pub mod validators;

// Re-export commonly used functions
pub use exit_codes::{describe_exit_status, get_exit_code_description};
pub use filesystem::{ensure_directory_exists, replace_file_atomically};
