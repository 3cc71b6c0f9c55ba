//! List-assignments command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::error::ClassroomError;
use crate::naming;
use anyhow::Result;
use async_trait::async_trait;
use classroom_github::HostingClient;
use colored::*;

/// Repository names of `classroom` that belong to the assignment `prefix`
///
/// One listing request is made; the returned iterator filters lazily and
/// keeps the order the hosting platform returned.
pub async fn list_assignments(
    hosting: &dyn HostingClient,
    classroom: &str,
    prefix: Option<&str>,
) -> Result<impl Iterator<Item = String> + use<>> {
    let names = hosting.list_repositories(classroom).await.map_err(|e| {
        ClassroomError::RemoteLookupFailure {
            operation: format!("Listing repositories of {}", classroom),
            message: format!("{e:#}"),
        }
    })?;

    let prefix = prefix.unwrap_or_default().to_string();
    Ok(names
        .into_iter()
        .filter(move |name| naming::matches_assignment(name, &prefix)))
}

/// List-assignments command
pub struct ListAssignmentsCommand {
    pub classroom: String,
    pub prefix: Option<String>,
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for ListAssignmentsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_name("classroom", &self.classroom)?;

        let names = list_assignments(
            context.hosting.as_ref(),
            &self.classroom,
            self.prefix.as_deref(),
        )
        .await?;

        if self.json {
            let names: Vec<String> = names.collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
            return Ok(());
        }

        let mut total = 0;
        for name in names {
            println!("{} {}", "•".blue(), name.bold());
            total += 1;
        }

        if total == 0 {
            let filter_desc = match &self.prefix {
                Some(prefix) => format!("matching '{}' ", prefix),
                None => String::new(),
            };
            println!(
                "{}",
                format!("No repositories {}found in {}", filter_desc, self.classroom).yellow()
            );
        } else {
            println!();
            println!("{}", format!("Total: {} repositories", total).green());
        }

        Ok(())
    }
}
