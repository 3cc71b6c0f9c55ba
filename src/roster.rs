//! Student roster parsing
//!
//! A roster is a comma-separated text file with one `identifier, group`
//! pair per line. Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # students for homework 1
//! alice@example.com, 1
//! bob, 1
//! carol@example.com, 2
//! ```

use crate::error::ClassroomError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Students grouped by group number
///
/// Groups iterate in ascending numeric order; students keep the order in
/// which they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    groups: BTreeMap<u32, Vec<String>>,
}

impl Roster {
    /// Read and parse a roster file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ClassroomError::FileNotFound(path.to_path_buf()).into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse roster text
    pub fn parse(content: &str) -> Result<Self> {
        let mut roster = Roster::default();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r').trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (identifier, group) = parse_line(line).map_err(|reason| {
                ClassroomError::InvalidRoster {
                    line: index + 1,
                    reason,
                }
            })?;
            roster.add(group, identifier);
        }

        Ok(roster)
    }

    /// Append a student to a group
    pub fn add(&mut self, group: u32, identifier: impl Into<String>) {
        self.groups.entry(group).or_default().push(identifier.into());
    }

    /// Iterate over `(group, students)` in ascending group order
    pub fn groups(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.groups
            .iter()
            .map(|(group, students)| (*group, students.as_slice()))
    }

    pub fn students(&self, group: u32) -> Option<&[String]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn parse_line(line: &str) -> std::result::Result<(&str, u32), String> {
    let (identifier, group) = line
        .split_once(',')
        .ok_or_else(|| format!("expected 'identifier, group' but found '{}'", line))?;

    let identifier = identifier.trim();
    let group = group.trim();

    if identifier.is_empty() {
        return Err("student identifier is empty".to_string());
    }

    match group.parse::<u32>() {
        Ok(number) if number > 0 => Ok((identifier, number)),
        _ => Err(format!(
            "group number '{}' is not a positive integer",
            group
        )),
    }
}
