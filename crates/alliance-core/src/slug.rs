//! Slug derivation for rank labels
//!
//! A slug is the lowercase, hyphenated form of a title, made unique within
//! its list by appending `-1`, `-2`, ...

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::RankLabel;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid regex"));

/// Why a slug was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlugProblem {
    #[error("Slug is required.")]
    Required,
    #[error("Slug can only contain lowercase letters, numbers, and hyphens.")]
    InvalidCharacters,
    #[error("Slug cannot start or end with a hyphen.")]
    EdgeHyphen,
    #[error("Slug cannot contain consecutive hyphens.")]
    ConsecutiveHyphens,
}

/// Lowercases `title` and reduces it to `[a-z0-9-]`.
pub fn sanitize_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let replaced = DISALLOWED.replace_all(lowered.trim(), "-");
    let collapsed = HYPHEN_RUNS.replace_all(&replaced, "-");
    let trimmed = collapsed.trim_matches('-');
    let hyphenated = WHITESPACE.replace_all(trimmed, "-");
    // "a - b" and "! b" would otherwise come out as "a---b" and "-b"
    HYPHEN_RUNS.replace_all(&hyphenated, "-").trim_matches('-').to_string()
}

/// Derives a slug for `title` that collides with no other row's slug.
///
/// `exclude` is the index of the row being edited; its current slug never
/// counts as a collision.
pub fn generate_slug(title: &str, rows: &[RankLabel], exclude: Option<usize>) -> String {
    if title.trim().is_empty() {
        return String::new();
    }
    let base = sanitize_title(title);
    if base.is_empty() {
        return base;
    }

    let mut candidate = base.clone();
    let mut counter = 1;
    while is_slug_taken(&candidate, rows, exclude) {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    candidate
}

pub fn is_slug_taken(slug: &str, rows: &[RankLabel], exclude: Option<usize>) -> bool {
    rows.iter()
        .enumerate()
        .any(|(index, row)| Some(index) != exclude && row.slug == slug)
}

pub fn validate_slug(slug: &str) -> Result<(), SlugProblem> {
    if slug.trim().is_empty() {
        return Err(SlugProblem::Required);
    }
    if !SLUG_CHARS.is_match(slug) {
        return Err(SlugProblem::InvalidCharacters);
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(SlugProblem::EdgeHyphen);
    }
    if slug.contains("--") {
        return Err(SlugProblem::ConsecutiveHyphens);
    }
    Ok(())
}
