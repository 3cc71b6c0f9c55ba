//! Academic year tokens and assignment repository names

use chrono::{Datelike, Local, NaiveDate};

/// Academic year token for a date, e.g. `2425` for anything from
/// August 2024 through July 2025
pub fn academic_year(date: NaiveDate) -> String {
    let year = date.year();
    let (start, end) = if date.month() <= 7 {
        (year - 1, year)
    } else {
        (year, year + 1)
    };
    format!("{:02}{:02}", start.rem_euclid(100), end.rem_euclid(100))
}

/// Academic year token for today's local date
pub fn current_academic_year() -> String {
    academic_year(Local::now().date_naive())
}

/// Repository name for one group of an assignment
pub fn repository_name(academic_year: &str, assignment: &str, group: u32) -> String {
    format!("{}-{}-group{:02}", academic_year, assignment, group)
}

/// Strip a leading academic-year token (`2425-`) from a repository name
pub fn strip_academic_year(name: &str) -> Option<&str> {
    let (token, rest) = name.split_once('-')?;
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        Some(rest)
    } else {
        None
    }
}

/// Whether a repository belongs to the assignment named by `prefix`
///
/// The prefix may include the year token (`2425-hw1`) or omit it (`hw1`).
pub fn matches_assignment(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix)
        || strip_academic_year(name).is_some_and(|rest| rest.starts_with(prefix))
}
