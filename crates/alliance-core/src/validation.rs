//! Pre-save validation
//!
//! Validation runs once, when a save is requested. A list with any issue is
//! never sent to the server.

use std::fmt;

use crate::slug::SlugProblem;

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rule {
    #[error("Title is required.")]
    TitleRequired,
    #[error("The title \"{title}\" is already used by another rank label.")]
    DuplicateTitle { title: String },
    #[error("{0}")]
    Slug(SlugProblem),
    #[error("Rank is required.")]
    RankRequired,
    /// Reported by the server (HTTP 400/422)
    #[error("{0}")]
    Server(String),
}

/// A rule violated by one row (or the whole request when `row` is `None`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub row: Option<usize>,
    pub rule: Rule,
}

impl ValidationIssue {
    pub fn new(row: usize, rule: Rule) -> Self {
        Self { row: Some(row), rule }
    }

    pub fn general(rule: Rule) -> Self {
        Self { row: None, rule }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "Row #{}: {}", row + 1, self.rule),
            None => write!(f, "{}", self.rule),
        }
    }
}

/// Joins issues into one line for notices and logs
pub fn summarize(issues: &[ValidationIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_is_one_based() {
        let issue = ValidationIssue::new(0, Rule::TitleRequired);
        assert_eq!(issue.to_string(), "Row #1: Title is required.");
    }

    #[test]
    fn test_summarize() {
        let issues = vec![
            ValidationIssue::new(2, Rule::Slug(SlugProblem::EdgeHyphen)),
            ValidationIssue::general(Rule::Server("bad rank".to_string())),
        ];
        assert_eq!(
            summarize(&issues),
            "Row #3: Slug cannot start or end with a hyphen. bad rank"
        );
    }
}
