//! GitHub hosting client library
//!
//! This library wraps the authenticated GitHub CLI (`gh`) behind the
//! [`HostingClient`] trait so that assignment orchestration never talks to
//! the process layer directly.
//!
//! ## Modules
//!
//! - [`client`]: `GhCli`, the process runner for `gh`
//! - [`users`]: user lookup by login or email
//! - [`repositories`]: repository existence, creation, listing and collaborators
//! - [`util`]: helpers for interpreting `gh` output

mod client;
mod repositories;
mod users;
mod util;

use anyhow::Result;

// Re-export public API
pub use client::GhCli;
pub use repositories::RepositoryEntry;
pub use users::{SearchResults, UserEntry};
pub use util::is_not_found;

/// Operations the assignment workflows need from the hosting platform.
///
/// Every method performs exactly one live request. A legitimate "not found"
/// answer is returned as a value (`None` / `false`); only transport or
/// authentication problems surface as `Err`.
#[async_trait::async_trait]
pub trait HostingClient: Send + Sync {
    /// Resolve a student identifier (login or email) to a login.
    async fn resolve_user(&self, identifier: &str) -> Result<Option<String>>;

    /// Check whether `owner/name` exists.
    async fn repository_exists(&self, owner: &str, name: &str) -> Result<bool>;

    /// Create a private repository, optionally seeded from `template`.
    async fn create_repository(
        &self,
        owner: &str,
        name: &str,
        template: Option<&str>,
    ) -> Result<()>;

    /// Invite `login` to `owner/name` with the given permission level.
    async fn add_collaborator(
        &self,
        owner: &str,
        name: &str,
        login: &str,
        permission: &str,
    ) -> Result<()>;

    /// List repository names under `owner`, in the order the API returns them.
    async fn list_repositories(&self, owner: &str) -> Result<Vec<String>>;
}
