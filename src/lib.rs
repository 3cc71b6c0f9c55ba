//! Classroom - A CLI tool for provisioning per-group GitHub repositories
//! for classroom assignments

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod naming;
pub mod preflight;
pub mod roster;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use classroom_github::{GhCli, HostingClient};
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use error::ClassroomError;
pub use git::VcsClient;
pub use roster::Roster;
