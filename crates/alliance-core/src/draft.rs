//! Ordered Draft List
//!
//! Keeps the last confirmed list next to an optional working draft. While a
//! draft exists every row remembers the rank it had in the confirmed list
//! (`original_order`), so the row number shown to the user does not change
//! when rows are reordered until the next save.

use tracing::{debug, warn};

use crate::domain::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Index `index` swaps with, if it stays inside `0..len`.
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => index + 1,
        };
        (index < len && target < len).then_some(target)
    }
}

/// One edit operation on a list of `R`
#[derive(Debug, Clone)]
pub enum Edit<R: Record> {
    Append(R),
    Update { index: usize, change: R::Change },
    Move { index: usize, direction: Direction },
    Remove(usize),
}

#[derive(Debug, Clone)]
pub struct OrderedDraftList<R> {
    confirmed: Vec<R>,
    draft: Option<Vec<R>>,
    /// 0-based confirmed rank of the row at each position
    original_order: Vec<usize>,
}

impl<R: Record> Default for OrderedDraftList<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Record> OrderedDraftList<R> {
    pub fn new(confirmed: Vec<R>) -> Self {
        let original_order = (0..confirmed.len()).collect();
        Self {
            confirmed,
            draft: None,
            original_order,
        }
    }

    pub fn confirmed(&self) -> &[R] {
        &self.confirmed
    }

    pub fn draft(&self) -> Option<&[R]> {
        self.draft.as_deref()
    }

    pub fn original_order(&self) -> &[usize] {
        &self.original_order
    }

    /// The draft if one exists, the confirmed list otherwise
    pub fn current(&self) -> &[R] {
        self.draft.as_deref().unwrap_or(&self.confirmed)
    }

    pub fn len(&self) -> usize {
        self.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.current().get(index)
    }

    pub fn has_pending_changes(&self) -> bool {
        self.draft.is_some()
    }

    /// 1-based row number shown next to the row at `index`.
    pub fn display_rank(&self, index: usize) -> usize {
        match self.original_order.get(index) {
            Some(&original) if self.draft.is_some() => original + 1,
            _ => index + 1,
        }
    }

    /// Rows of the current list paired with their display rank
    pub fn rows(&self) -> impl Iterator<Item = (usize, &R)> + '_ {
        self.current()
            .iter()
            .enumerate()
            .map(|(index, row)| (self.display_rank(index), row))
    }

    pub fn apply(&mut self, edit: Edit<R>) -> bool {
        match edit {
            Edit::Append(record) => self.append(record),
            Edit::Update { index, change } => self.update(index, change),
            Edit::Move { index, direction } => self.move_row(index, direction),
            Edit::Remove(index) => self.remove(index),
        }
    }

    /// Appends `record` as a new, unsaved row. Always opens a draft.
    pub fn append(&mut self, mut record: R) -> bool {
        let position = self.len();
        record.clear_id();
        record.placed(position);
        self.working_copy().push(record);
        let next = self.original_order.len();
        self.original_order.push(next);
        debug!(kind = R::KIND, position, "appended row");
        true
    }

    /// Applies `change` to the row at `index`. Opens a draft even when the
    /// value is unchanged.
    pub fn update(&mut self, index: usize, change: R::Change) -> bool {
        if index >= self.len() {
            warn!(kind = R::KIND, index, len = self.len(), "update out of range");
            return false;
        }
        R::apply(self.working_copy(), index, change);
        true
    }

    /// Swaps the row at `index` with its neighbour. Moving past either end
    /// changes nothing.
    pub fn move_row(&mut self, index: usize, direction: Direction) -> bool {
        let Some(target) = direction.target(index, self.len()) else {
            if index >= self.len() {
                warn!(kind = R::KIND, index, len = self.len(), "move out of range");
            }
            return false;
        };
        let rows = self.working_copy();
        rows.swap(index, target);
        R::reorder(rows);
        if target < self.original_order.len() && index < self.original_order.len() {
            self.original_order.swap(index, target);
        }
        debug!(kind = R::KIND, from = index, to = target, "moved row");
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.len() {
            warn!(kind = R::KIND, index, len = self.len(), "remove out of range");
            return false;
        }
        self.working_copy().remove(index);
        if index < self.original_order.len() {
            self.original_order.remove(index);
        }
        debug!(kind = R::KIND, index, "removed row");
        true
    }

    /// Makes `records` the confirmed list and drops the draft.
    pub fn confirm(&mut self, records: Vec<R>) {
        self.original_order = (0..records.len()).collect();
        self.confirmed = records;
        self.draft = None;
    }

    /// Drops the draft and every pending edit.
    pub fn discard(&mut self) {
        self.draft = None;
        self.original_order = (0..self.confirmed.len()).collect();
    }

    fn working_copy(&mut self) -> &mut Vec<R> {
        let confirmed = &self.confirmed;
        self.draft.get_or_insert_with(|| confirmed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Partner, PartnerChange, RankLabel, RankLabelChange};

    fn partners(ranks: &[&str]) -> Vec<Partner> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, rank)| Partner {
                id: i as u32 + 1,
                ..Partner::with_rank(*rank)
            })
            .collect()
    }

    #[test]
    fn test_direction_target() {
        assert_eq!(Direction::Up.target(0, 3), None);
        assert_eq!(Direction::Up.target(2, 3), Some(1));
        assert_eq!(Direction::Down.target(2, 3), None);
        assert_eq!(Direction::Down.target(0, 3), Some(1));
        assert_eq!(Direction::Down.target(5, 3), None);
    }

    #[test]
    fn test_append_opens_draft() {
        let mut list = OrderedDraftList::new(partners(&["gold"]));
        assert!(!list.has_pending_changes());

        assert!(list.append(Partner { id: 42, ..Partner::blank() }));
        assert!(list.has_pending_changes());
        assert_eq!(list.confirmed().len(), 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.current()[1].id, 0);
        assert_eq!(list.original_order(), &[0, 1]);
        assert_eq!(list.display_rank(1), 2);
    }

    #[test]
    fn test_update_with_same_value_opens_draft() {
        let mut list = OrderedDraftList::new(partners(&["gold"]));
        assert!(list.update(0, PartnerChange::Rank("gold".to_string())));
        assert!(list.has_pending_changes());
        assert_eq!(list.draft(), Some(list.confirmed()));
    }

    #[test]
    fn test_boundary_moves_do_not_open_draft() {
        let mut list = OrderedDraftList::new(partners(&["a", "b", "c"]));
        assert!(!list.move_row(0, Direction::Up));
        assert!(!list.move_row(2, Direction::Down));
        assert!(!list.move_row(7, Direction::Up));
        assert!(!list.has_pending_changes());
    }

    #[test]
    fn test_move_keeps_display_rank_with_record() {
        let mut list = OrderedDraftList::new(partners(&["a", "b", "c"]));
        assert!(list.move_row(0, Direction::Down));
        assert!(list.move_row(1, Direction::Down));

        let ranks: Vec<(usize, &str)> = list.rows().map(|(rank, p)| (rank, p.rank.as_str())).collect();
        assert_eq!(ranks, vec![(2, "b"), (3, "c"), (1, "a")]);
    }

    #[test]
    fn test_remove_shifts_original_order() {
        let mut list = OrderedDraftList::new(partners(&["a", "b", "c", "d"]));
        list.move_row(3, Direction::Up);
        assert_eq!(list.original_order(), &[0, 1, 3, 2]);

        assert!(list.remove(1));
        assert_eq!(list.original_order(), &[0, 3, 2]);
        assert_eq!(list.display_rank(1), 4);
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut list = OrderedDraftList::new(partners(&["a"]));
        assert!(!list.update(1, PartnerChange::Frontpage(true)));
        assert!(!list.remove(1));
        assert!(!list.has_pending_changes());
    }

    #[test]
    fn test_discard_restores_confirmed() {
        let mut list = OrderedDraftList::new(partners(&["a", "b"]));
        list.append(Partner::blank());
        list.remove(0);
        list.discard();
        assert!(!list.has_pending_changes());
        assert_eq!(list.current(), list.confirmed());
        assert_eq!(list.original_order(), &[0, 1]);
    }

    #[test]
    fn test_rank_label_menu_order_follows_position() {
        let mut list = OrderedDraftList::new(vec![
            RankLabel { id: 3, menu_order: 0, ..RankLabel::titled("Gold") },
            RankLabel { id: 4, menu_order: 1, ..RankLabel::titled("Silver") },
        ]);
        list.append(RankLabel::blank());
        list.update(2, RankLabelChange::Title("Bronze".to_string()));
        list.move_row(2, Direction::Up);

        let orders: Vec<(String, i32)> = list.current().iter().map(|l| (l.slug.clone(), l.menu_order)).collect();
        assert_eq!(
            orders,
            vec![("gold".to_string(), 0), ("bronze".to_string(), 1), ("silver".to_string(), 2)]
        );
    }

    #[test]
    fn test_apply_dispatches_edits() {
        let mut list = OrderedDraftList::new(partners(&["a", "b"]));
        assert!(list.apply(Edit::Move {
            index: 0,
            direction: Direction::Down
        }));
        assert!(list.apply(Edit::Remove(0)));
        assert!(list.apply(Edit::Update {
            index: 0,
            change: PartnerChange::JumpUrl("/join".to_string())
        }));
        assert_eq!(list.current()[0].rank, "a");
        assert_eq!(list.current()[0].jump_url, "/join");
    }
}
