//! Update command implementation
//!
//! Downloads the latest published binary, compares it with the running
//! executable and, when they differ, stages the download next to the
//! installation and renames it into place.

use super::{Command, CommandContext};
use crate::constants;
use crate::error::ClassroomError;
use crate::utils::replace_file_atomically;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::path::{Path, PathBuf};

/// Result of installing a candidate binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate,
    Updated,
}

/// Download the published binary from `url`
pub async fn fetch_latest(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header("User-Agent", constants::update::DEFAULT_USER_AGENT)
        .send()
        .await
        .map_err(|e| ClassroomError::FetchFailed(format!("{}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClassroomError::FetchFailed(format!(
            "{} returned {} {}",
            url,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ))
        .into());
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClassroomError::FetchFailed(format!("{}: {}", url, e)))?;

    if bytes.is_empty() {
        return Err(ClassroomError::FetchFailed(format!("{} returned no content", url)).into());
    }

    Ok(bytes.to_vec())
}

/// Install `candidate` over `installed` unless the contents are identical
pub fn install_update(installed: &Path, candidate: &[u8]) -> Result<UpdateStatus> {
    let current = std::fs::read(installed)
        .with_context(|| format!("Failed to read {}", installed.display()))?;

    if current == candidate {
        return Ok(UpdateStatus::UpToDate);
    }

    replace_file_atomically(installed, candidate, true)?;
    Ok(UpdateStatus::Updated)
}

/// Rewrite `completion_file` with the output of `executable autocomplete`
pub fn regenerate_completions(
    executable: &Path,
    completion_file: &Path,
    shell: &str,
) -> Result<()> {
    let output = std::process::Command::new(executable)
        .args(["autocomplete", "--shell", shell])
        .output()
        .with_context(|| format!("Failed to run {}", executable.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "autocomplete failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    replace_file_atomically(completion_file, &output.stdout, false)
}

/// Update command replacing the running installation
#[derive(Default)]
pub struct UpdateCommand {
    /// Installation to replace; the running executable when `None`
    pub executable: Option<PathBuf>,
}

#[async_trait]
impl Command for UpdateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let executable = match &self.executable {
            Some(path) => path.clone(),
            None => std::env::current_exe().context("Failed to locate the running executable")?,
        };

        println!(
            "{}",
            format!("Checking {} for updates...", context.config.update_url).green()
        );
        let candidate = fetch_latest(&context.config.update_url).await?;

        match install_update(&executable, &candidate)? {
            UpdateStatus::UpToDate => {
                println!("{}", "Already up to date".green());
                return Ok(());
            }
            UpdateStatus::Updated => {
                println!("{}", format!("Updated {}", executable.display()).green());
            }
        }

        if let Some(completion_file) = context.config.completion_path()
            && completion_file.is_file()
        {
            match regenerate_completions(
                &executable,
                &completion_file,
                &context.config.completion_shell,
            ) {
                Ok(()) => println!(
                    "{}",
                    format!("Regenerated {}", completion_file.display()).green()
                ),
                Err(e) => println!(
                    "{}",
                    format!("Warning: could not regenerate completions: {e:#}").yellow()
                ),
            }
        }

        Ok(())
    }
}
