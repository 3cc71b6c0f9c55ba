//! Common test support utilities and fixtures
//!
//! Recording fakes for the hosting and version-control seams, plus helpers
//! for running the built binary.

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use classroom::commands::{CommandContext, Prompt};
use classroom::config::Config;
use classroom::{HostingClient, VcsClient};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A call received by [`FakeHosting`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostingCall {
    ResolveUser(String),
    RepositoryExists(String),
    CreateRepository {
        name: String,
        template: Option<String>,
    },
    AddCollaborator {
        repository: String,
        login: String,
        permission: String,
    },
    ListRepositories(String),
}

impl HostingCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            HostingCall::CreateRepository { .. } | HostingCall::AddCollaborator { .. }
        )
    }
}

/// In-memory hosting platform that records every call
#[derive(Default)]
pub struct FakeHosting {
    users: HashMap<String, String>,
    failing_users: HashSet<String>,
    failing_creates: HashSet<String>,
    failing_invites: HashSet<String>,
    failing_lookups: HashSet<String>,
    list_fails: bool,
    repositories: Mutex<Vec<String>>,
    calls: Mutex<Vec<HostingCall>>,
}

impl FakeHosting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account; `identifier` may be a login or an email
    pub fn with_user(mut self, identifier: &str, login: &str) -> Self {
        self.users.insert(identifier.to_string(), login.to_string());
        self
    }

    /// Make the lookup of `identifier` fail like a transport error
    pub fn with_failing_user(mut self, identifier: &str) -> Self {
        self.failing_users.insert(identifier.to_string());
        self
    }

    pub fn with_repository(self, name: &str) -> Self {
        self.repositories.lock().unwrap().push(name.to_string());
        self
    }

    pub fn with_failing_create(mut self, name: &str) -> Self {
        self.failing_creates.insert(name.to_string());
        self
    }

    pub fn with_failing_invite(mut self, login: &str) -> Self {
        self.failing_invites.insert(login.to_string());
        self
    }

    pub fn with_failing_lookup(mut self, name: &str) -> Self {
        self.failing_lookups.insert(name.to_string());
        self
    }

    pub fn with_failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<HostingCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<HostingCall> {
        self.calls().into_iter().filter(HostingCall::is_mutation).collect()
    }

    pub fn created(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostingCall::CreateRepository { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn invited(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostingCall::AddCollaborator {
                    repository, login, ..
                } => Some((repository, login)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostingCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl HostingClient for FakeHosting {
    async fn resolve_user(&self, identifier: &str) -> Result<Option<String>> {
        self.record(HostingCall::ResolveUser(identifier.to_string()));
        if self.failing_users.contains(identifier) {
            return Err(anyhow!("error connecting to api.github.com"));
        }
        Ok(self.users.get(identifier).cloned())
    }

    async fn repository_exists(&self, _owner: &str, name: &str) -> Result<bool> {
        self.record(HostingCall::RepositoryExists(name.to_string()));
        if self.failing_lookups.contains(name) {
            return Err(anyhow!("HTTP 502: Bad Gateway"));
        }
        Ok(self.repositories.lock().unwrap().iter().any(|r| r == name))
    }

    async fn create_repository(
        &self,
        _owner: &str,
        name: &str,
        template: Option<&str>,
    ) -> Result<()> {
        self.record(HostingCall::CreateRepository {
            name: name.to_string(),
            template: template.map(str::to_string),
        });
        if self.failing_creates.contains(name) {
            return Err(anyhow!("HTTP 422: name already exists on this account"));
        }
        self.repositories.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn add_collaborator(
        &self,
        _owner: &str,
        name: &str,
        login: &str,
        permission: &str,
    ) -> Result<()> {
        self.record(HostingCall::AddCollaborator {
            repository: name.to_string(),
            login: login.to_string(),
            permission: permission.to_string(),
        });
        if self.failing_invites.contains(login) {
            return Err(anyhow!("HTTP 403: Forbidden"));
        }
        Ok(())
    }

    async fn list_repositories(&self, owner: &str) -> Result<Vec<String>> {
        self.record(HostingCall::ListRepositories(owner.to_string()));
        if self.list_fails {
            return Err(anyhow!("HTTP 401: Bad credentials"));
        }
        Ok(self.repositories.lock().unwrap().clone())
    }
}

/// A call received by [`FakeVcs`]
#[derive(Debug, Clone, PartialEq)]
pub enum VcsCall {
    Clone { full_name: String, target: PathBuf },
    Pull(PathBuf),
}

/// Version-control fake; a successful clone creates the target directory
#[derive(Default)]
pub struct FakeVcs {
    failing: HashSet<String>,
    calls: Mutex<Vec<VcsCall>>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail clone and pull of the repository called `name`
    pub fn with_failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.lock().unwrap().clone()
    }

    fn fails(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.failing.contains(name))
    }
}

#[async_trait::async_trait]
impl VcsClient for FakeVcs {
    async fn clone_repository(&self, full_name: &str, target: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(VcsCall::Clone {
            full_name: full_name.to_string(),
            target: target.to_path_buf(),
        });
        if self.fails(target) {
            return Err(anyhow!("fatal: repository '{}' not found", full_name));
        }
        std::fs::create_dir_all(target)?;
        Ok(())
    }

    async fn pull(&self, directory: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(VcsCall::Pull(directory.to_path_buf()));
        if self.fails(directory) {
            return Err(anyhow!("fatal: not a git repository"));
        }
        Ok(())
    }
}

/// Prompt that records questions and answers with a fixed value
pub struct RecordingPrompt {
    answer: bool,
    questions: Mutex<Vec<String>>,
}

impl RecordingPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompt for RecordingPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self.answer)
    }
}

/// Build a command context around the fakes
pub fn context(
    hosting: &Arc<FakeHosting>,
    vcs: &Arc<FakeVcs>,
    prompt: &Arc<RecordingPrompt>,
) -> CommandContext {
    context_with_config(Config::new(), hosting, vcs, prompt)
}

pub fn context_with_config(
    config: Config,
    hosting: &Arc<FakeHosting>,
    vcs: &Arc<FakeVcs>,
    prompt: &Arc<RecordingPrompt>,
) -> CommandContext {
    CommandContext {
        config,
        hosting: hosting.clone(),
        vcs: vcs.clone(),
        prompt: prompt.clone(),
    }
}

/// Write a roster file into `dir` and return its path
pub fn write_roster(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, content).expect("Failed to write roster");
    path
}

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the built classroom binary with the given arguments
pub fn run_cli(args: &[&str]) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_classroom"))
        .args(args)
        .env("CLASSROOM_CONFIG", "")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute classroom");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Initialize a git repository with one commit
pub fn init_git_repo(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)?;

    let git = |args: &[&str]| Command::new("git").args(args).current_dir(path).output();
    git(&["init"])?;
    git(&["config", "user.name", "Test User"])?;
    git(&["config", "user.email", "test@example.com"])?;
    std::fs::write(path.join("README.md"), "# Assignment")?;
    git(&["add", "."])?;
    git(&["commit", "-m", "Initial commit"])?;

    Ok(())
}
