//! Editor Context
//!
//! Binds a sync controller to Leptos signals. The controller itself lives in
//! a local `StoredValue`; a version counter is bumped after every change so
//! views re-read the list.

use std::cell::RefCell;
use std::rc::Rc;

use alliance_core::{
    Direction, Partner, Persistence, RankLabel, Record, SyncController, SyncError, SyncOperation, SyncState, UiStrings,
};
use leptos::prelude::*;
use tracing::debug;

use crate::commands::{MediaLibrary, PartnerEndpoint, RankLabelEndpoint};
use crate::store::StoreNotifier;

type Shared<R, P> = Rc<RefCell<SyncController<R, P, StoreNotifier>>>;

/// One list editor (partners or rank labels)
pub struct Editor<R: Record + 'static, P: 'static> {
    controller: StoredValue<Shared<R, P>, LocalStorage>,
    persistence: StoredValue<P, LocalStorage>,
    /// Bumped after every change of the list
    version: RwSignal<u32>,
    saving: RwSignal<bool>,
}

impl<R: Record + 'static, P: 'static> Clone for Editor<R, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record + 'static, P: 'static> Copy for Editor<R, P> {}

impl<R, P> Editor<R, P>
where
    R: Record + 'static,
    P: Persistence<R> + Clone + 'static,
{
    pub fn new(persistence: P, notifier: StoreNotifier) -> Self {
        let controller = SyncController::new(persistence.clone(), notifier);
        Self {
            controller: StoredValue::new_local(Rc::new(RefCell::new(controller))),
            persistence: StoredValue::new_local(persistence),
            version: RwSignal::new(0),
            saving: RwSignal::new(false),
        }
    }

    fn shared(&self) -> Shared<R, P> {
        self.controller.get_value()
    }

    fn changed(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    fn read<T>(&self, f: impl FnOnce(&SyncController<R, P, StoreNotifier>) -> T) -> T {
        self.version.track();
        f(&self.shared().borrow())
    }

    fn write(&self, f: impl FnOnce(&mut SyncController<R, P, StoreNotifier>) -> bool) -> bool {
        let changed = f(&mut self.shared().borrow_mut());
        if changed {
            self.changed();
        }
        changed
    }

    /// Current rows paired with their display rank
    pub fn rows(&self) -> Vec<(usize, R)> {
        self.read(|c| c.list().rows().map(|(rank, row)| (rank, row.clone())).collect())
    }

    pub fn confirmed(&self) -> Vec<R> {
        self.read(|c| c.list().confirmed().to_vec())
    }

    pub fn len(&self) -> usize {
        self.read(|c| c.list().len())
    }

    pub fn state(&self) -> SyncState {
        self.read(|c| c.state())
    }

    pub fn is_dirty(&self) -> bool {
        self.state() == SyncState::Dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving.get()
    }

    pub fn append(&self, record: R) -> bool {
        self.write(|c| c.append(record))
    }

    pub fn update(&self, index: usize, change: R::Change) -> bool {
        self.write(|c| c.update(index, change))
    }

    pub fn move_row(&self, index: usize, direction: Direction) -> bool {
        self.write(|c| c.move_row(index, direction))
    }

    pub fn remove(&self, index: usize) -> bool {
        self.write(|c| c.remove(index))
    }

    pub fn cancel(&self) {
        self.write(|c| {
            c.cancel();
            true
        });
    }

    /// Loads the authoritative list, dropping any draft.
    pub async fn load(self) -> Result<(), SyncError> {
        if self.saving.get_untracked() {
            return Err(SyncError::Busy);
        }
        let persistence = self.persistence.get_value();
        let outcome = persistence.load().await;
        let result = self.shared().borrow_mut().finish_load(outcome).map(|_| ());
        self.changed();
        result
    }

    /// Saves the draft. New rows are reloaded afterwards to pick up their
    /// server-assigned identities; that reload never notifies and never
    /// changes the save's result.
    pub async fn save(self) -> Result<(), SyncError> {
        let Some(ticket) = self.shared().borrow_mut().begin_save()? else {
            return Ok(());
        };
        let refresh = ticket.has_new_records();
        self.saving.set(true);
        self.changed();

        let persistence = self.persistence.get_value();
        let outcome = persistence.save(ticket.records()).await;
        let result = self.shared().borrow_mut().finish_save(ticket, outcome);
        self.saving.set(false);
        self.changed();

        if result.is_ok() && refresh && self.state() == SyncState::Clean {
            debug!(kind = R::KIND, "reloading for assigned identities");
            let outcome = persistence.load().await;
            if self.shared().borrow_mut().finish_refresh(outcome) {
                self.changed();
            }
        }
        result
    }

    /// Repeats the failed load, or the failed save once a load succeeded.
    pub async fn retry(self) -> Result<(), SyncError> {
        let operation = self.shared().borrow().retry_operation();
        match operation {
            SyncOperation::Load => self.load().await,
            SyncOperation::Save => self.save().await,
        }
    }
}

pub type PartnerEditor = Editor<Partner, PartnerEndpoint>;
pub type RankLabelEditor = Editor<RankLabel, RankLabelEndpoint>;

/// App-wide editors provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub partners: PartnerEditor,
    pub rank_labels: RankLabelEditor,
    pub partner_endpoint: StoredValue<PartnerEndpoint, LocalStorage>,
    pub media: StoredValue<MediaLibrary, LocalStorage>,
    /// A settings-form save is outstanding; it shares `save-all` with the
    /// partner list
    pub settings_saving: RwSignal<bool>,
}

impl AdminContext {
    pub fn new(
        partner_endpoint: PartnerEndpoint,
        rank_label_endpoint: RankLabelEndpoint,
        media: MediaLibrary,
        notifiers: (StoreNotifier, StoreNotifier),
    ) -> Self {
        Self {
            partners: Editor::new(partner_endpoint.clone(), notifiers.0),
            rank_labels: Editor::new(rank_label_endpoint, notifiers.1),
            partner_endpoint: StoredValue::new_local(partner_endpoint),
            media: StoredValue::new_local(media),
            settings_saving: RwSignal::new(false),
        }
    }

    /// Either writer of `save-all` is in flight
    pub fn save_all_busy(&self) -> bool {
        self.partners.is_saving() || self.settings_saving.get()
    }
}

pub fn use_admin_context() -> AdminContext {
    expect_context::<AdminContext>()
}

/// Translated UI strings, English when the host sent none
pub fn use_strings() -> UiStrings {
    use_context::<UiStrings>().unwrap_or_default()
}
