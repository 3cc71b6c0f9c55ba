//! Repository-related operations

use crate::client::GhCli;
use crate::util::is_not_found;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// One row of `gh repo list --json name`
#[derive(Deserialize, Debug, Clone)]
pub struct RepositoryEntry {
    pub name: String,
}

impl GhCli {
    pub async fn check_repository(&self, owner: &str, name: &str) -> Result<bool> {
        let endpoint = format!("repos/{}/{}", owner, name);
        let output = self.run(&["api", &endpoint]).await?;

        if output.success {
            return Ok(true);
        }
        if is_not_found(&output.stderr) {
            return Ok(false);
        }
        Err(anyhow!(
            "Failed to check repository {}/{}: {}",
            owner,
            name,
            output.stderr.trim()
        ))
    }

    pub async fn create_private_repository(
        &self,
        owner: &str,
        name: &str,
        template: Option<&str>,
    ) -> Result<()> {
        let full_name = format!("{}/{}", owner, name);
        let mut args = vec!["repo", "create", full_name.as_str(), "--private"];
        if let Some(template) = template {
            args.extend_from_slice(&["--template", template]);
        }

        self.run_checked(&args)
            .await
            .with_context(|| format!("Failed to create repository {}", full_name))?;
        Ok(())
    }

    pub async fn invite_collaborator(
        &self,
        owner: &str,
        name: &str,
        login: &str,
        permission: &str,
    ) -> Result<()> {
        let endpoint = format!("repos/{}/{}/collaborators/{}", owner, name, login);
        let permission = format!("permission={}", permission);

        self.run_checked(&["api", "-X", "PUT", &endpoint, "-f", &permission])
            .await
            .with_context(|| format!("Failed to invite {} to {}/{}", login, owner, name))?;
        Ok(())
    }

    pub async fn list_repository_names(&self, owner: &str) -> Result<Vec<String>> {
        let limit = self.list_limit.to_string();
        let entries: Vec<RepositoryEntry> = self
            .run_json(&["repo", "list", owner, "--limit", &limit, "--json", "name"])
            .await
            .with_context(|| format!("Failed to list repositories of {}", owner))?;

        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}
