use alliance_core::domain::{Partner, PartnerChange};
use alliance_core::draft::{Direction, OrderedDraftList};
use proptest::prelude::*;

fn confirmed(n: usize) -> Vec<Partner> {
    (0..n)
        .map(|i| Partner {
            id: i as u32 + 1,
            ..Partner::with_rank(format!("rank-{i}"))
        })
        .collect()
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

#[test]
fn test_add_save_edit_cancel_scenario() {
    let mut list = OrderedDraftList::new(confirmed(2));

    list.append(Partner::with_rank("c"));
    assert_eq!(list.len(), 3);
    assert_eq!(list.display_rank(2), 3);

    let draft = list.current().to_vec();
    list.confirm(draft.clone());
    assert_eq!(list.confirmed(), draft.as_slice());
    assert!(!list.has_pending_changes());
    assert_eq!(list.display_rank(2), 3);

    list.update(0, PartnerChange::Frontpage(true));
    assert_eq!(list.display_rank(0), 1);

    list.move_row(0, Direction::Down);
    assert_eq!(list.current()[0].id, 2);
    assert!(list.current()[1].frontpage);
    assert_eq!(list.display_rank(0), 2);
    assert_eq!(list.display_rank(1), 1);

    list.discard();
    assert!(!list.has_pending_changes());
    assert_eq!(list.current(), draft.as_slice());
    for i in 0..list.len() {
        assert_eq!(list.display_rank(i), i + 1);
    }
}

#[test]
fn test_boundary_moves_keep_list_clean() {
    let mut list = OrderedDraftList::new(confirmed(4));
    let before = list.clone();
    assert!(!list.move_row(0, Direction::Up));
    assert!(!list.move_row(3, Direction::Down));
    assert_eq!(list.draft(), before.draft());
    assert_eq!(list.original_order(), before.original_order());
}

proptest! {
    #[test]
    fn prop_display_rank_follows_record(
        (n, moves) in (1usize..8).prop_flat_map(|n| {
            (Just(n), prop::collection::vec((0..n, direction()), 0..24))
        })
    ) {
        let mut list = OrderedDraftList::new(confirmed(n));
        for (index, direction) in moves {
            list.move_row(index, direction);
            for (position, partner) in list.current().iter().enumerate() {
                // ids were assigned as confirmed position + 1
                prop_assert_eq!(list.display_rank(position), partner.id as usize);
            }
        }
    }

    #[test]
    fn prop_remove_shifts_without_renumbering(
        (n, moves, removed) in (2usize..8).prop_flat_map(|n| {
            (Just(n), prop::collection::vec((0..n, direction()), 0..12), 0..n)
        })
    ) {
        let mut list = OrderedDraftList::new(confirmed(n));
        for (index, direction) in moves {
            list.move_row(index, direction);
        }
        let mut expected = list.original_order().to_vec();
        expected.remove(removed);

        prop_assert!(list.remove(removed));
        prop_assert_eq!(list.original_order(), expected.as_slice());
        prop_assert_eq!(list.len(), n - 1);
    }

    #[test]
    fn prop_append_always_opens_draft(n in 0usize..6) {
        let mut list = OrderedDraftList::new(confirmed(n));
        prop_assert!(list.append(Partner::blank()));
        prop_assert!(list.has_pending_changes());
        prop_assert_eq!(list.display_rank(n), n + 1);
        prop_assert_eq!(list.current()[n].id, 0);
    }
}
