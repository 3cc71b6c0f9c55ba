//! Clone and pull operations for assignment repositories
//!
//! Cloning goes through `gh repo clone` so the user's configured git
//! protocol and credentials apply; pulling is plain `git pull`.

use crate::utils::describe_exit_status;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Clone `owner/name` into `target`
pub async fn clone_repository(full_name: &str, target: &Path) -> Result<()> {
    let output = Command::new("gh")
        .args(["repo", "clone", full_name])
        .arg(target)
        .output()
        .await
        .context("Failed to execute gh repo clone")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "Failed to clone {} ({}): {}",
            full_name,
            describe_exit_status(output.status),
            stderr.trim()
        );
    }

    Ok(())
}

/// Pull the current branch of an existing clone
pub async fn pull_repository(directory: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("-C")
        .arg(directory)
        .arg("pull")
        .output()
        .await
        .context("Failed to execute git pull")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "Failed to pull {} ({}): {}",
            directory.display(),
            describe_exit_status(output.status),
            stderr.trim()
        );
    }

    Ok(())
}
