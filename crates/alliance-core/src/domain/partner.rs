//! Partner Entity
//!
//! One alliance banner: a logo (image or video), optional poster frame,
//! the rank it is grouped under and what happens when it is clicked.

use serde::{Deserialize, Deserializer, Serialize};

use super::record::Record;
use super::wire;
use crate::validation::{Rule, ValidationIssue};

/// Click behavior of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// Navigate to `jump_url`
    #[default]
    Jump,
    /// Open a modal showing `message`
    Modal,
}

impl Behavior {
    pub const ALL: [Behavior; 2] = [Behavior::Jump, Behavior::Modal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::Jump => "jump",
            Behavior::Modal => "modal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Behavior::Jump => "Jump to URL",
            Behavior::Modal => "Show Modal",
        }
    }

    /// Unknown values fall back to `Jump`, as the server sanitizer does.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "modal" => Behavior::Modal,
            _ => Behavior::Jump,
        }
    }
}

impl<'de> Deserialize<'de> for Behavior {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Behavior::from_wire).unwrap_or_default())
    }
}

/// A partner banner row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// Position-based identity handed out on load; never sent back
    #[serde(default, skip_serializing, deserialize_with = "wire::attachment_id")]
    pub id: u32,
    /// Shown on the front page
    #[serde(default, with = "wire::yes_no")]
    pub frontpage: bool,
    /// Rank slug, or the literal `default`
    #[serde(default = "default_rank", deserialize_with = "wire::lenient_string")]
    pub rank: String,
    /// Logo attachment id (image or video)
    #[serde(default, deserialize_with = "wire::attachment_id")]
    pub logo: u32,
    /// Poster attachment id for video logos
    #[serde(default, deserialize_with = "wire::attachment_id")]
    pub poster: u32,
    #[serde(default, deserialize_with = "wire::lenient_string")]
    pub jump_url: String,
    #[serde(default)]
    pub behavior: Behavior,
    /// Modal body for `Behavior::Modal`
    #[serde(default, deserialize_with = "wire::lenient_string")]
    pub message: String,
}

/// Rank value that matches the first rank label
pub const DEFAULT_RANK: &str = "default";

fn default_rank() -> String {
    DEFAULT_RANK.to_string()
}

impl Partner {
    /// A fresh row as added by "Add New Partner"
    pub fn blank() -> Self {
        Self {
            id: 0,
            frontpage: false,
            rank: default_rank(),
            logo: 0,
            poster: 0,
            jump_url: String::new(),
            behavior: Behavior::Jump,
            message: String::new(),
        }
    }

    pub fn with_rank(rank: impl Into<String>) -> Self {
        Self {
            rank: rank.into(),
            ..Self::blank()
        }
    }

    pub fn is_default_rank(&self) -> bool {
        self.rank.eq_ignore_ascii_case(DEFAULT_RANK)
    }
}

impl Default for Partner {
    fn default() -> Self {
        Self::blank()
    }
}

/// Field edits for a partner row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerChange {
    Frontpage(bool),
    Rank(String),
    Logo(u32),
    Poster(u32),
    JumpUrl(String),
    Behavior(Behavior),
    Message(String),
}

impl Record for Partner {
    type Change = PartnerChange;

    const KIND: &'static str = "partner";

    const SAVED_MESSAGE: &'static str = "Settings saved successfully.";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    fn apply(rows: &mut [Self], index: usize, change: PartnerChange) {
        let row = &mut rows[index];
        match change {
            PartnerChange::Frontpage(v) => row.frontpage = v,
            PartnerChange::Rank(v) => row.rank = v,
            PartnerChange::Logo(v) => row.logo = v,
            PartnerChange::Poster(v) => row.poster = v,
            PartnerChange::JumpUrl(v) => row.jump_url = v,
            PartnerChange::Behavior(v) => row.behavior = v,
            PartnerChange::Message(v) => row.message = v,
        }
    }

    fn validate(rows: &[Self]) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (row, partner) in rows.iter().enumerate() {
            if partner.rank.trim().is_empty() {
                issues.push(ValidationIssue::new(row, Rule::RankRequired));
            }
        }
        issues
    }
}
