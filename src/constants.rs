//! Central constants for the classroom application

/// Default values for hosting operations
pub mod github {
    /// Permission granted to invited students (`push` is GitHub's "write")
    pub const DEFAULT_PERMISSION: &str = "push";

    /// Permission levels accepted by the collaborators endpoint
    pub const PERMISSIONS: &[&str] = &["pull", "triage", "push", "maintain", "admin"];

    /// Maximum number of repositories requested from `gh repo list`
    pub const DEFAULT_LIST_LIMIT: usize = 1000;
}

/// Default values for self-update
pub mod update {
    /// Canonical location of the latest published binary
    pub const DEFAULT_UPDATE_URL: &str =
        "https://github.com/classroom-tools/classroom/releases/latest/download/classroom";

    /// Default User-Agent header for update requests
    pub const DEFAULT_USER_AGENT: &str = concat!("classroom/", env!("CARGO_PKG_VERSION"));
}

/// Default values for configuration
pub mod config {
    /// Environment variable naming an alternative configuration file
    pub const CONFIG_ENV_VAR: &str = "CLASSROOM_CONFIG";

    /// Configuration file location relative to `$HOME`
    pub const DEFAULT_CONFIG_FILE: &str = ".config/classroom/config.yaml";

    /// Completion script location relative to `$HOME`, regenerated by
    /// `update` when present
    pub const DEFAULT_COMPLETION_FILE: &str = ".local/share/bash-completion/completions/classroom";

    /// Shell used when generating completion scripts
    pub const DEFAULT_COMPLETION_SHELL: &str = "bash";

    /// Target directory for get-assignment
    pub const DEFAULT_TARGET_DIR: &str = ".";
}
