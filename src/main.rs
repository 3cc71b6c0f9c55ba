use anyhow::Result;
use clap::Parser;
use classroom::cli::{Cli, Commands, usage_for};
use classroom::commands::*;
use classroom::error::{ClassroomError, classify};
use classroom::{config::Config, preflight};
use colored::*;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; every usage error exits 1
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let subcommand = cli.command.name();
    if let Err(error) = run(cli).await {
        match classify(&error) {
            Some(ClassroomError::UserCancelled) => {
                eprintln!("{}", "Cancelled, no changes were made".yellow());
            }
            Some(ClassroomError::Usage(_)) => {
                eprintln!("{} {:#}", "Error:".red().bold(), error);
                if let Some(usage) = usage_for(subcommand) {
                    eprintln!("\n{}\n\nFor more information, try '--help'.", usage);
                }
            }
            _ => eprintln!("{} {:#}", "Error:".red().bold(), error),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::CreateAssignment {
            classroom,
            assignment,
            roster,
            template,
            yes,
        } => {
            let context = system_context(config_path)?;
            preflight::require_gh_auth()?;

            let context = confirm_with(context, yes);
            CreateAssignmentCommand {
                classroom,
                assignment,
                roster,
                template,
            }
            .execute(&context)
            .await?;
        }
        Commands::ListAssignments {
            classroom,
            prefix,
            json,
        } => {
            let context = system_context(config_path)?;
            preflight::require_gh_auth()?;

            ListAssignmentsCommand {
                classroom,
                prefix,
                json,
            }
            .execute(&context)
            .await?;
        }
        Commands::GetAssignment {
            classroom,
            prefix,
            directory,
            yes,
        } => {
            let context = system_context(config_path)?;
            preflight::require_gh_auth()?;
            preflight::require_tool("git")?;

            let context = confirm_with(context, yes);
            GetAssignmentCommand {
                classroom,
                prefix,
                directory,
            }
            .execute(&context)
            .await?;
        }
        Commands::Update => {
            let context = system_context(config_path)?;
            UpdateCommand::default().execute(&context).await?;
        }
        Commands::Autocomplete { shell } => {
            // Must work without a config file or any external tool
            let context = CommandContext::system(Config::new());
            AutocompleteCommand { shell }.execute(&context).await?;
        }
    }

    Ok(())
}

fn system_context(config_path: Option<&Path>) -> Result<CommandContext> {
    let config = Config::load_config(config_path)?;
    Ok(CommandContext::system(config))
}

fn confirm_with(context: CommandContext, assume_yes: bool) -> CommandContext {
    if assume_yes {
        context.with_prompt(Arc::new(FixedAnswer(true)))
    } else {
        context
    }
}
