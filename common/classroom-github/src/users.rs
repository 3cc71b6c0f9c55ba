//! User lookup operations

use crate::client::GhCli;
use crate::util::is_not_found;
use anyhow::{Result, anyhow};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct UserEntry {
    pub login: String,
}

/// Response body of the user search endpoint
#[derive(Deserialize, Debug)]
pub struct SearchResults {
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<UserEntry>,
}

impl GhCli {
    /// Look a user up by login; `None` when GitHub answers 404
    pub async fn user_by_login(&self, login: &str) -> Result<Option<String>> {
        let endpoint = format!("users/{}", login);
        let output = self.run(&["api", &endpoint]).await?;

        if !output.success {
            if is_not_found(&output.stderr) {
                return Ok(None);
            }
            return Err(anyhow!(
                "User lookup for '{}' failed: {}",
                login,
                output.stderr.trim()
            ));
        }

        let user: UserEntry = serde_json::from_str(&output.stdout)
            .map_err(|e| anyhow!("Failed to parse user '{}': {}", login, e))?;
        Ok(Some(user.login))
    }

    /// Find the account whose public email matches `email`
    pub async fn user_by_email(&self, email: &str) -> Result<Option<String>> {
        let query = format!("q={} in:email", email);
        let results: SearchResults = self
            .run_json(&["api", "-X", "GET", "search/users", "-f", &query])
            .await?;

        if results.total_count == 0 {
            return Ok(None);
        }
        Ok(results.items.into_iter().next().map(|user| user.login))
    }
}
