//! Get-assignment command implementation

use super::list::list_assignments;
use super::validators;
use super::{Command, CommandContext};
use crate::error::ClassroomError;
use crate::git::{Logger, VcsClient};
use crate::utils::ensure_directory_exists;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::{Path, PathBuf};

/// What happened to one repository of the batch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Cloned,
    Pulled,
    Failed(String),
}

/// Clone or pull every named repository into `directory`
///
/// An existing `directory/<name>` directory is pulled and a missing one is
/// cloned; any other file in the way is reported as a failure. Each
/// repository is independent: a failure is logged and the batch continues.
pub async fn fetch_repositories(
    vcs: &dyn VcsClient,
    classroom: &str,
    names: &[String],
    directory: &Path,
) -> Vec<(String, FetchOutcome)> {
    let logger = Logger;
    let mut outcomes = Vec::with_capacity(names.len());

    for name in names {
        let target = directory.join(name);
        let outcome = if target.is_dir() {
            logger.info(name, "Pulling latest changes");
            match vcs.pull(&target).await {
                Ok(()) => FetchOutcome::Pulled,
                Err(e) => FetchOutcome::Failed(format!("{e:#}")),
            }
        } else if target.exists() {
            FetchOutcome::Failed(format!(
                "{} exists and is not a directory",
                target.display()
            ))
        } else {
            logger.info(name, &format!("Cloning into {}", target.display()));
            let full_name = format!("{}/{}", classroom, name);
            match vcs.clone_repository(&full_name, &target).await {
                Ok(()) => FetchOutcome::Cloned,
                Err(e) => FetchOutcome::Failed(format!("{e:#}")),
            }
        };

        match &outcome {
            FetchOutcome::Cloned => logger.success(name, "Successfully cloned"),
            FetchOutcome::Pulled => logger.success(name, "Up to date"),
            FetchOutcome::Failed(message) => logger.error(name, message),
        }
        outcomes.push((name.clone(), outcome));
    }

    outcomes
}

/// Get-assignment command
pub struct GetAssignmentCommand {
    pub classroom: String,
    pub prefix: String,
    pub directory: PathBuf,
}

#[async_trait]
impl Command for GetAssignmentCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_name("classroom", &self.classroom)?;

        let names: Vec<String> = list_assignments(
            context.hosting.as_ref(),
            &self.classroom,
            Some(self.prefix.as_str()),
        )
        .await?
        .collect();

        if names.is_empty() {
            println!(
                "{}",
                format!(
                    "No repositories matching '{}' found in {}",
                    self.prefix, self.classroom
                )
                .yellow()
            );
            return Ok(());
        }

        println!(
            "{}",
            format!("Found {} repositories", names.len()).green()
        );
        for name in &names {
            println!("{} {}", "•".blue(), name.bold());
        }
        println!();

        let question = format!(
            "Clone or update {} repositories into {}?",
            names.len(),
            self.directory.display()
        );
        if !context.prompt.confirm(&question)? {
            return Err(ClassroomError::UserCancelled.into());
        }

        ensure_directory_exists(&self.directory)?;

        let outcomes = fetch_repositories(
            context.vcs.as_ref(),
            &self.classroom,
            &names,
            &self.directory,
        )
        .await;

        let errors: Vec<&String> = outcomes
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                FetchOutcome::Failed(message) => Some(message),
                _ => None,
            })
            .collect();
        let successful = outcomes.len() - errors.len();

        if errors.is_empty() {
            println!("{}", "Done fetching repositories".green());
        } else {
            println!(
                "{}",
                format!(
                    "Completed with {} successful, {} failed",
                    successful,
                    errors.len()
                )
                .yellow()
            );

            if successful == 0 {
                return Err(anyhow::anyhow!(
                    "All fetch operations failed. First error: {}",
                    errors[0]
                ));
            }
        }

        Ok(())
    }
}
