//! Global Admin State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use alliance_core::{DisplayStyle, Notice, Notifier, RankLabel};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// Which editor a notice came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeSource {
    Partners,
    RankLabels,
    Settings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoticeEntry {
    pub id: u32,
    pub source: NoticeSource,
    pub notice: Notice,
}

/// Global admin state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Visible notices, oldest first
    pub notices: Vec<NoticeEntry>,
    pub next_notice_id: u32,
    /// Display style chosen in the settings form (saved or not)
    pub display_style: DisplayStyle,
    /// Last confirmed rank labels, for the partner rank selector
    pub rank_labels: Vec<RankLabel>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Shows `notice` and schedules its dismissal
pub fn store_push_notice(store: &AdminStore, source: NoticeSource, notice: Notice) -> u32 {
    let id = store.next_notice_id().get_untracked();
    store.next_notice_id().set(id.wrapping_add(1));

    let delay = u32::try_from(notice.dismiss_after.as_millis()).unwrap_or(u32::MAX);
    store.notices().write().push(NoticeEntry { id, source, notice });

    let store = *store;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay).await;
        store_dismiss_notice(&store, id);
    });
    id
}

pub fn store_dismiss_notice(store: &AdminStore, id: u32) {
    store.notices().write().retain(|entry| entry.id != id);
}

pub fn store_set_display_style(store: &AdminStore, style: DisplayStyle) {
    store.display_style().set(style);
}

pub fn store_set_rank_labels(store: &AdminStore, labels: Vec<RankLabel>) {
    store.rank_labels().set(labels);
}

/// Sync-controller notifier that posts into the store
#[derive(Clone, Copy)]
pub struct StoreNotifier {
    store: AdminStore,
    source: NoticeSource,
}

impl StoreNotifier {
    pub fn new(store: AdminStore, source: NoticeSource) -> Self {
        Self { store, source }
    }
}

impl Notifier for StoreNotifier {
    fn notify(&self, notice: Notice) {
        store_push_notice(&self.store, self.source, notice);
    }
}
