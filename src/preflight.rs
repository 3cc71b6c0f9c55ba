//! Startup checks for the external tools the commands rely on

use crate::error::ClassroomError;
use anyhow::Result;
use std::process::Command;

/// Fail unless `tool --version` can be executed
pub fn require_tool(tool: &str) -> Result<()> {
    match Command::new(tool).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(ClassroomError::PreconditionMissing {
            tool: tool.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into()),
        Err(e) => Err(ClassroomError::PreconditionMissing {
            tool: tool.to_string(),
            reason: format!("not found on PATH ({})", e),
        }
        .into()),
    }
}

/// Fail unless the GitHub CLI is installed and logged in
pub fn require_gh_auth() -> Result<()> {
    require_tool("gh")?;

    let output = Command::new("gh")
        .args(["auth", "status"])
        .output()
        .map_err(|e| ClassroomError::PreconditionMissing {
            tool: "gh".to_string(),
            reason: e.to_string(),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = if stderr.trim().is_empty() {
        "not logged in; run 'gh auth login'".to_string()
    } else {
        format!("{} (run 'gh auth login')", stderr.trim())
    };
    Err(ClassroomError::PreconditionMissing {
        tool: "gh".to_string(),
        reason,
    }
    .into())
}
