//! Confirmation gate in front of every mutating step

use anyhow::{Context, Result};
use colored::*;
use std::io::{BufRead, Write};

/// Source of yes/no answers
pub trait Prompt: Send + Sync {
    /// Ask `question`; `true` only for an explicit affirmative answer
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Reads answers from standard input
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        ask(&mut stdin.lock(), &mut stdout.lock(), question)
    }
}

/// Answers every question the same way (`--yes`, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompt for FixedAnswer {
    fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Print the question and read a single answer line
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{} {} ", question.bold(), "[y/N]".dimmed())?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
