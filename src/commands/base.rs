//! Base types and traits for the command pattern

use super::prompt::{Prompt, StdinPrompt};
use crate::config::Config;
use crate::git::{SystemGit, VcsClient};
use anyhow::Result;
use classroom_github::{GhCli, HostingClient};
use std::sync::Arc;

/// Context passed to all commands containing configuration and collaborators
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// Hosting platform client
    pub hosting: Arc<dyn HostingClient>,
    /// Local version-control client
    pub vcs: Arc<dyn VcsClient>,
    /// Confirmation source for mutating steps
    pub prompt: Arc<dyn Prompt>,
}

impl CommandContext {
    /// Context backed by the real `gh`/`git` tools and stdin confirmation
    pub fn system(config: Config) -> Self {
        let hosting = GhCli::new(config.list_limit);
        Self {
            config,
            hosting: Arc::new(hosting),
            vcs: Arc::new(SystemGit),
            prompt: Arc::new(StdinPrompt),
        }
    }

    /// Replace the confirmation source
    pub fn with_prompt(mut self, prompt: Arc<dyn Prompt>) -> Self {
        self.prompt = prompt;
        self
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
