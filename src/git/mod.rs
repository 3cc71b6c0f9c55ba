//! Local git operations using the system `gh` and `git` commands
//!
//! ## Sub-modules
//!
//! - [`clone`]: clone and pull of assignment repositories
//! - [`common`]: `Logger` for consistent per-repository output

pub mod clone;
pub mod common;

use anyhow::Result;
use std::path::Path;

pub use clone::{clone_repository, pull_repository};
pub use common::Logger;

/// Version-control operations used by get-assignment
#[async_trait::async_trait]
pub trait VcsClient: Send + Sync {
    /// Clone `owner/name` into `target`
    async fn clone_repository(&self, full_name: &str, target: &Path) -> Result<()>;

    /// Pull the latest changes into an existing clone
    async fn pull(&self, directory: &Path) -> Result<()>;
}

/// `VcsClient` backed by `gh repo clone` and `git pull`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

#[async_trait::async_trait]
impl VcsClient for SystemGit {
    async fn clone_repository(&self, full_name: &str, target: &Path) -> Result<()> {
        clone_repository(full_name, target).await
    }

    async fn pull(&self, directory: &Path) -> Result<()> {
        pull_repository(directory).await
    }
}
