//! Create-assignment command implementation
//!
//! Creation runs in two phases. [`plan_assignment`] resolves every student
//! against the hosting platform and produces an [`AssignmentPlan`] without
//! mutating anything. After confirmation, [`apply_plan`] creates the
//! repositories and sends invitations, continuing past per-item failures.

use super::validators;
use super::{Command, CommandContext};
use crate::error::ClassroomError;
use crate::git::Logger;
use crate::naming;
use crate::roster::Roster;
use anyhow::Result;
use async_trait::async_trait;
use classroom_github::HostingClient;
use colored::*;
use std::path::PathBuf;

/// Result of resolving one roster identifier
#[derive(Debug, Clone, PartialEq)]
pub enum UserLookup {
    /// The identifier belongs to this login
    Found(String),
    /// No such account
    NotFound,
    /// The lookup itself failed (transport or authentication)
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentStatus {
    pub identifier: String,
    pub lookup: UserLookup,
}

/// One repository the plan would create
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRepository {
    pub group: u32,
    pub name: String,
    pub students: Vec<StudentStatus>,
}

/// Everything create-assignment would do, computed without side effects
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPlan {
    pub classroom: String,
    pub assignment: String,
    pub template: Option<String>,
    pub repositories: Vec<PlannedRepository>,
}

impl AssignmentPlan {
    pub fn student_count(&self) -> usize {
        self.repositories.iter().map(|repo| repo.students.len()).sum()
    }

    /// Students whose account could not be confirmed
    pub fn unresolved_count(&self) -> usize {
        self.repositories
            .iter()
            .flat_map(|repo| &repo.students)
            .filter(|student| !matches!(student.lookup, UserLookup::Found(_)))
            .count()
    }

    /// Print the repository → students preview
    pub fn print_preview(&self) {
        println!(
            "{}",
            format!(
                "Assignment '{}' in {}: {} repositories",
                self.assignment,
                self.classroom,
                self.repositories.len()
            )
            .green()
        );
        if let Some(template) = &self.template {
            println!("Template: {}", template);
        }
        println!();

        for repo in &self.repositories {
            println!("{} {}", "•".blue(), repo.name.bold());
            for student in &repo.students {
                match &student.lookup {
                    UserLookup::Found(login) if login == &student.identifier => {
                        println!("  {} {}", "✓".green(), student.identifier);
                    }
                    UserLookup::Found(login) => {
                        println!("  {} {} ({})", "✓".green(), student.identifier, login);
                    }
                    UserLookup::NotFound => {
                        println!(
                            "  {} {} {}",
                            "✗".red(),
                            student.identifier,
                            "(no GitHub account)".yellow()
                        );
                    }
                    UserLookup::Failed(message) => {
                        println!(
                            "  {} {} {}",
                            "!".yellow(),
                            student.identifier,
                            format!("(lookup failed: {})", message).yellow()
                        );
                    }
                }
            }
        }
        println!();

        let unresolved = self.unresolved_count();
        if unresolved > 0 {
            println!(
                "{}",
                format!(
                    "{} of {} students will not be invited",
                    unresolved,
                    self.student_count()
                )
                .yellow()
            );
        }
    }
}

/// Resolve the roster against the hosting platform without mutating it
pub async fn plan_assignment(
    hosting: &dyn HostingClient,
    classroom: &str,
    assignment: &str,
    roster: &Roster,
    academic_year: &str,
    template: Option<String>,
) -> AssignmentPlan {
    let mut repositories = Vec::with_capacity(roster.group_count());

    for (group, identifiers) in roster.groups() {
        let mut students = Vec::with_capacity(identifiers.len());
        for identifier in identifiers {
            let lookup = match hosting.resolve_user(identifier).await {
                Ok(Some(login)) => UserLookup::Found(login),
                Ok(None) => UserLookup::NotFound,
                Err(e) => UserLookup::Failed(format!("{e:#}")),
            };
            students.push(StudentStatus {
                identifier: identifier.clone(),
                lookup,
            });
        }

        repositories.push(PlannedRepository {
            group,
            name: naming::repository_name(academic_year, assignment, group),
            students,
        });
    }

    AssignmentPlan {
        classroom: classroom.to_string(),
        assignment: assignment.to_string(),
        template,
        repositories,
    }
}

/// What happened to one planned repository
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryOutcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// What happened to one student of a created repository
#[derive(Debug, Clone, PartialEq)]
pub enum InvitationOutcome {
    Invited(String),
    SkippedMissing,
    SkippedLookupFailed(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryReport {
    pub name: String,
    pub outcome: RepositoryOutcome,
    pub invitations: Vec<(String, InvitationOutcome)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreationReport {
    pub repositories: Vec<RepositoryReport>,
}

impl CreationReport {
    fn count_repositories(&self, predicate: impl Fn(&RepositoryOutcome) -> bool) -> usize {
        self.repositories
            .iter()
            .filter(|repo| predicate(&repo.outcome))
            .count()
    }

    fn count_invitations(&self, predicate: impl Fn(&InvitationOutcome) -> bool) -> usize {
        self.repositories
            .iter()
            .flat_map(|repo| &repo.invitations)
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }

    pub fn created(&self) -> usize {
        self.count_repositories(|o| *o == RepositoryOutcome::Created)
    }

    pub fn already_existing(&self) -> usize {
        self.count_repositories(|o| *o == RepositoryOutcome::AlreadyExists)
    }

    pub fn failed(&self) -> usize {
        self.count_repositories(|o| matches!(o, RepositoryOutcome::Failed(_)))
    }

    pub fn invited(&self) -> usize {
        self.count_invitations(|o| matches!(o, InvitationOutcome::Invited(_)))
    }

    pub fn not_invited(&self) -> usize {
        self.count_invitations(|o| !matches!(o, InvitationOutcome::Invited(_)))
    }

    pub fn print_summary(&self) {
        println!();
        let summary = format!(
            "Repositories: {} created, {} already existing, {} failed. Students: {} invited, {} not invited",
            self.created(),
            self.already_existing(),
            self.failed(),
            self.invited(),
            self.not_invited()
        );
        if self.failed() == 0 && self.not_invited() == 0 {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.yellow());
        }
    }
}

/// Create the planned repositories and invite their students
///
/// Repositories that already exist are skipped together with their
/// invitations. A failure for one repository or student is logged and
/// recorded; the remaining work still runs.
pub async fn apply_plan(
    hosting: &dyn HostingClient,
    plan: &AssignmentPlan,
    permission: &str,
) -> CreationReport {
    let logger = Logger;
    let mut report = CreationReport::default();

    for repo in &plan.repositories {
        let outcome = create_one(hosting, plan, repo, &logger).await;
        let invitations = if outcome == RepositoryOutcome::Created {
            invite_students(hosting, &plan.classroom, repo, permission, &logger).await
        } else {
            Vec::new()
        };

        report.repositories.push(RepositoryReport {
            name: repo.name.clone(),
            outcome,
            invitations,
        });
    }

    report
}

async fn create_one(
    hosting: &dyn HostingClient,
    plan: &AssignmentPlan,
    repo: &PlannedRepository,
    logger: &Logger,
) -> RepositoryOutcome {
    match hosting.repository_exists(&plan.classroom, &repo.name).await {
        Ok(true) => {
            logger.warn(&repo.name, "Repository already exists, skipping");
            return RepositoryOutcome::AlreadyExists;
        }
        Ok(false) => {}
        Err(e) => {
            let error = ClassroomError::RemoteLookupFailure {
                operation: "Repository lookup".to_string(),
                message: format!("{e:#}"),
            };
            logger.error(&repo.name, &error.to_string());
            return RepositoryOutcome::Failed(error.to_string());
        }
    }

    match hosting
        .create_repository(&plan.classroom, &repo.name, plan.template.as_deref())
        .await
    {
        Ok(()) => {
            logger.success(&repo.name, "Created private repository");
            RepositoryOutcome::Created
        }
        Err(e) => {
            let message = format!("{e:#}");
            logger.error(&repo.name, &message);
            RepositoryOutcome::Failed(message)
        }
    }
}

async fn invite_students(
    hosting: &dyn HostingClient,
    classroom: &str,
    repo: &PlannedRepository,
    permission: &str,
    logger: &Logger,
) -> Vec<(String, InvitationOutcome)> {
    let mut invitations = Vec::with_capacity(repo.students.len());

    for student in &repo.students {
        let outcome = match &student.lookup {
            UserLookup::Found(login) => {
                match hosting
                    .add_collaborator(classroom, &repo.name, login, permission)
                    .await
                {
                    Ok(()) => {
                        logger.info(&repo.name, &format!("Invited {}", login));
                        InvitationOutcome::Invited(login.clone())
                    }
                    Err(e) => {
                        let message = format!("{e:#}");
                        logger.error(&repo.name, &message);
                        InvitationOutcome::Failed(message)
                    }
                }
            }
            UserLookup::NotFound => {
                logger.warn(
                    &repo.name,
                    &format!("Skipping {}: no GitHub account", student.identifier),
                );
                InvitationOutcome::SkippedMissing
            }
            UserLookup::Failed(message) => {
                logger.warn(
                    &repo.name,
                    &format!("Skipping {}: lookup failed", student.identifier),
                );
                InvitationOutcome::SkippedLookupFailed(message.clone())
            }
        };
        invitations.push((student.identifier.clone(), outcome));
    }

    invitations
}

/// Create-assignment command
pub struct CreateAssignmentCommand {
    pub classroom: String,
    pub assignment: String,
    pub roster: PathBuf,
    pub template: Option<String>,
}

#[async_trait]
impl Command for CreateAssignmentCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_name("classroom", &self.classroom)?;
        validators::validate_name("assignment", &self.assignment)?;

        let template = self
            .template
            .clone()
            .or_else(|| context.config.default_template.clone());
        validators::validate_template(&template)?;

        let roster = Roster::load(&self.roster)?;
        if roster.is_empty() {
            println!(
                "{}",
                format!("No students found in {}", self.roster.display()).yellow()
            );
            return Ok(());
        }

        let academic_year = naming::current_academic_year();
        println!(
            "{}",
            format!(
                "Checking students of {} groups on GitHub...",
                roster.group_count()
            )
            .green()
        );

        let plan = plan_assignment(
            context.hosting.as_ref(),
            &self.classroom,
            &self.assignment,
            &roster,
            &academic_year,
            template,
        )
        .await;
        plan.print_preview();

        let question = format!(
            "Create {} repositories in {}?",
            plan.repositories.len(),
            plan.classroom
        );
        if !context.prompt.confirm(&question)? {
            return Err(ClassroomError::UserCancelled.into());
        }

        let report = apply_plan(context.hosting.as_ref(), &plan, &context.config.permission).await;
        report.print_summary();

        Ok(())
    }
}
