//! Command-line interface definition

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "classroom")]
#[command(about = "Provision and manage per-group GitHub repositories for classroom assignments")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create one repository per roster group and invite its students
    CreateAssignment {
        /// Organization that owns the assignment repositories
        classroom: String,

        /// Assignment name used in repository names
        assignment: String,

        /// Roster file with 'identifier, group' lines
        roster: PathBuf,

        /// Template repository as 'owner/name'
        template: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List assignment repositories of a classroom
    ListAssignments {
        /// Organization that owns the assignment repositories
        classroom: String,

        /// Only list repositories of this assignment
        prefix: Option<String>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Clone or pull every repository of an assignment
    GetAssignment {
        /// Organization that owns the assignment repositories
        classroom: String,

        /// Assignment name (with or without the academic year)
        prefix: String,

        /// Directory receiving the clones
        #[arg(default_value = crate::constants::config::DEFAULT_TARGET_DIR)]
        directory: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace this installation with the latest published version
    Update,

    /// Print a shell completion script
    ///
    /// Save the bash script as ~/.local/share/bash-completion/completions/classroom
    /// (or set `completion_file` in the config) and `update` keeps it current.
    Autocomplete {
        /// Shell to generate the script for
        #[arg(long, value_enum, default_value_t = Shell::Bash)]
        shell: Shell,
    },
}

impl Commands {
    /// Name of the subcommand as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::CreateAssignment { .. } => "create-assignment",
            Commands::ListAssignments { .. } => "list-assignments",
            Commands::GetAssignment { .. } => "get-assignment",
            Commands::Update => "update",
            Commands::Autocomplete { .. } => "autocomplete",
        }
    }
}

/// Usage line of `subcommand`, as clap prints it for argument errors
pub fn usage_for(subcommand: &str) -> Option<String> {
    let mut command = Cli::command();
    command.build();
    command
        .find_subcommand_mut(subcommand)
        .map(|sub| sub.render_usage().to_string())
}
