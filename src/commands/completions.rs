//! Autocomplete command implementation

use super::{Command, CommandContext};
use crate::cli::Cli;
use anyhow::Result;
use async_trait::async_trait;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

/// Write the completion script for `shell` to `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, out);
}

/// Autocomplete command printing a completion script to stdout
pub struct AutocompleteCommand {
    pub shell: Shell,
}

#[async_trait]
impl Command for AutocompleteCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<()> {
        let stdout = std::io::stdout();
        write_completions(self.shell, &mut stdout.lock());
        Ok(())
    }
}
