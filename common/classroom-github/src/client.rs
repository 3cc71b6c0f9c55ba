//! `gh` process runner

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::process::Command;

/// Captured result of a single `gh` invocation
#[derive(Debug)]
pub(crate) struct GhOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Hosting client backed by the GitHub CLI
///
/// The CLI must already be authenticated; this type never handles tokens.
#[derive(Debug, Clone)]
pub struct GhCli {
    pub(crate) program: String,
    pub(crate) list_limit: usize,
}

impl GhCli {
    /// Create a client that runs `gh` from `PATH`
    pub fn new(list_limit: usize) -> Self {
        Self::with_program("gh", list_limit)
    }

    /// Create a client that runs a specific executable instead of `gh`
    pub fn with_program(program: impl Into<String>, list_limit: usize) -> Self {
        Self {
            program: program.into(),
            list_limit,
        }
    }

    pub(crate) async fn run(&self, args: &[&str]) -> Result<GhOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Failed to execute {} {}", self.program, args.join(" ")))?;

        Ok(GhOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run a command that must succeed, returning its stdout
    pub(crate) async fn run_checked(&self, args: &[&str]) -> Result<String> {
        let output = self.run(args).await?;
        if !output.success {
            anyhow::bail!(
                "{} {} failed: {}",
                self.program,
                args.first().copied().unwrap_or_default(),
                output.stderr.trim()
            );
        }
        Ok(output.stdout)
    }

    /// Run a command that must succeed and parse its stdout as JSON
    pub(crate) async fn run_json<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        let stdout = self.run_checked(args).await?;
        serde_json::from_str(&stdout).context("Failed to parse gh JSON output")
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait::async_trait]
impl crate::HostingClient for GhCli {
    async fn resolve_user(&self, identifier: &str) -> Result<Option<String>> {
        if identifier.contains('@') {
            self.user_by_email(identifier).await
        } else {
            self.user_by_login(identifier).await
        }
    }

    async fn repository_exists(&self, owner: &str, name: &str) -> Result<bool> {
        self.check_repository(owner, name).await
    }

    async fn create_repository(
        &self,
        owner: &str,
        name: &str,
        template: Option<&str>,
    ) -> Result<()> {
        self.create_private_repository(owner, name, template).await
    }

    async fn add_collaborator(
        &self,
        owner: &str,
        name: &str,
        login: &str,
        permission: &str,
    ) -> Result<()> {
        self.invite_collaborator(owner, name, login, permission).await
    }

    async fn list_repositories(&self, owner: &str) -> Result<Vec<String>> {
        self.list_repository_names(owner).await
    }
}
