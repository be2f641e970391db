//! Rank grouping
//!
//! Arranges front-page partners under their rank labels the way the public
//! banner block renders them, and lists the rank values the partner editor
//! offers.

use crate::domain::{Partner, RankLabel, DEFAULT_RANK};

/// One rank label and the partners shown under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup<'a> {
    pub label: &'a RankLabel,
    pub partners: Vec<&'a Partner>,
}

impl RankGroup<'_> {
    /// Rendered as an empty slot on the public page
    pub fn is_placeholder(&self) -> bool {
        self.partners.is_empty()
    }
}

/// Labels in `menu_order`; ties keep their list order.
pub fn ordered_labels(labels: &[RankLabel]) -> Vec<&RankLabel> {
    let mut ordered: Vec<&RankLabel> = labels.iter().collect();
    ordered.sort_by_key(|label| label.menu_order);
    ordered
}

pub fn group_by_rank<'a>(partners: &'a [Partner], labels: &'a [RankLabel]) -> Vec<RankGroup<'a>> {
    ordered_labels(labels)
        .into_iter()
        .enumerate()
        .map(|(position, label)| RankGroup {
            label,
            partners: partners
                .iter()
                .filter(|p| p.frontpage && (label.matches_rank(&p.rank) || (position == 0 && p.is_default_rank())))
                .collect(),
        })
        .collect()
}

/// A selectable rank value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOption {
    pub value: String,
    pub label: String,
}

pub fn rank_options(labels: &[RankLabel]) -> Vec<RankOption> {
    let default = RankOption {
        value: DEFAULT_RANK.to_string(),
        label: "Default".to_string(),
    };
    std::iter::once(default)
        .chain(
            ordered_labels(labels)
                .into_iter()
                .filter(|label| !label.slug.is_empty())
                .map(|label| RankOption {
                    value: label.slug.clone(),
                    label: label.title.clone(),
                }),
        )
        .collect()
}
