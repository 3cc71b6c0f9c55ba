//! Command implementations

pub mod base;
pub mod completions;
pub mod create;
pub mod get;
pub mod list;
pub mod prompt;
pub mod update;
pub mod validators;

pub use base::{Command, CommandContext};
pub use completions::AutocompleteCommand;
pub use create::CreateAssignmentCommand;
pub use get::GetAssignmentCommand;
pub use list::ListAssignmentsCommand;
pub use prompt::{FixedAnswer, Prompt, StdinPrompt};
pub use update::UpdateCommand;
