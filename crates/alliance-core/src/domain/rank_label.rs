//! Rank Label Entity
//!
//! Rank labels group partner banners on the public site. They are ordered
//! by `menu_order` and carry a slug derived from their title.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::wire;
use crate::slug::{generate_slug, validate_slug};
use crate::validation::{Rule, ValidationIssue};

/// A rank label row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankLabel {
    /// Post id, 0 until the label is first saved
    #[serde(default, deserialize_with = "wire::attachment_id")]
    pub id: u32,
    #[serde(default, deserialize_with = "wire::lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "wire::lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "wire::attachment_id")]
    pub thumbnail_id: u32,
    #[serde(default, deserialize_with = "wire::lenient_i32")]
    pub menu_order: i32,
    #[serde(default, deserialize_with = "wire::lenient_string")]
    pub slug: String,
}

impl RankLabel {
    /// A fresh row as added by "Add New Rank Label"
    pub fn blank() -> Self {
        Self {
            id: 0,
            title: String::new(),
            content: String::new(),
            thumbnail_id: 0,
            menu_order: 0,
            slug: String::new(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = crate::slug::sanitize_title(&title);
        Self {
            title,
            slug,
            ..Self::blank()
        }
    }

    /// Case-insensitive match against either the title or the slug
    pub fn matches_rank(&self, rank: &str) -> bool {
        let rank = rank.trim();
        !rank.is_empty() && (self.title.trim().eq_ignore_ascii_case(rank) || self.slug.eq_ignore_ascii_case(rank))
    }
}

impl Default for RankLabel {
    fn default() -> Self {
        Self::blank()
    }
}

/// Field edits for a rank label row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankLabelChange {
    /// Also re-derives the slug
    Title(String),
    Content(String),
    Thumbnail(u32),
}

impl Record for RankLabel {
    type Change = RankLabelChange;

    const KIND: &'static str = "rank label";

    const SAVED_MESSAGE: &'static str = "Rank labels saved successfully.";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    fn apply(rows: &mut [Self], index: usize, change: RankLabelChange) {
        match change {
            RankLabelChange::Title(title) => {
                let slug = generate_slug(&title, rows, Some(index));
                let row = &mut rows[index];
                row.title = title;
                row.slug = slug;
            }
            RankLabelChange::Content(content) => rows[index].content = content,
            RankLabelChange::Thumbnail(id) => rows[index].thumbnail_id = id,
        }
    }

    fn placed(&mut self, position: usize) {
        self.menu_order = i32::try_from(position).unwrap_or(i32::MAX);
    }

    fn reorder(rows: &mut [Self]) {
        for (position, row) in rows.iter_mut().enumerate() {
            row.placed(position);
        }
    }

    fn validate(rows: &[Self]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for (row, label) in rows.iter().enumerate() {
            let title = label.title.trim();
            if title.is_empty() {
                issues.push(ValidationIssue::new(row, Rule::TitleRequired));
                continue;
            }
            if !seen.insert(title.to_lowercase()) {
                issues.push(ValidationIssue::new(
                    row,
                    Rule::DuplicateTitle {
                        title: title.to_string(),
                    },
                ));
            }
            // Persisted rows keep the server-assigned post name
            if label.is_new() && !label.slug.is_empty() {
                if let Err(problem) = validate_slug(&label.slug) {
                    issues.push(ValidationIssue::new(row, Rule::Slug(problem)));
                }
            }
        }
        issues
    }
}
