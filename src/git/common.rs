//! Shared output helpers for repository operations

use colored::*;

/// Logger for repository operations with consistent formatting
///
/// Each message is prefixed with the repository name in cyan/bold:
///
/// ```text
/// 2425-hw1-group01 | Cloning into ./2425-hw1-group01
/// ```
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg);
    }

    pub fn success(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg.green());
    }

    pub fn warn(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, name: &str, msg: &str) {
        eprintln!("{} | {}", name.cyan().bold(), msg.red());
    }
}
