//! Sync Controller
//!
//! Connects one [`OrderedDraftList`] to its remote store. Loading replaces
//! the confirmed list. Saving sends the whole draft in one request and
//! either commits it or leaves both lists untouched.
//!
//! ```text
//! INIT  --load ok-->  CLEAN  --edit-->  DIRTY  --cancel / save ok-->  CLEAN
//!                                       DIRTY  --save failed-->  DIRTY
//! ```

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::Record;
use crate::draft::{Direction, Edit, OrderedDraftList};
use crate::error::SyncError;
use crate::notice::{Notice, Notifier};

/// What the server said about a successful save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReceipt {
    pub message: Option<String>,
}

impl SaveReceipt {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Remote store for one list of records
#[async_trait(?Send)]
pub trait Persistence<R: Record> {
    async fn load(&self) -> Result<Vec<R>, SyncError>;

    /// Replaces the stored list with `records` in a single request.
    async fn save(&self, records: &[R]) -> Result<SaveReceipt, SyncError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncState {
    /// Nothing loaded yet
    Init,
    Clean,
    Dirty,
}

/// Snapshot of the draft taken when a save starts
#[derive(Debug, Clone)]
pub struct SaveTicket<R> {
    generation: u64,
    records: Vec<R>,
}

impl<R: Record> SaveTicket<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Whether the server will assign identities during this save
    pub fn has_new_records(&self) -> bool {
        self.records.iter().any(Record::is_new)
    }
}

/// Request kind a controller sends to its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncOperation {
    Load,
    Save,
}

pub struct SyncController<R: Record, P, N> {
    list: OrderedDraftList<R>,
    persistence: P,
    notifier: N,
    loaded: bool,
    in_flight: Option<u64>,
    generation: u64,
    /// Edits made while a save was outstanding
    queued: Vec<Edit<R>>,
    last_failure: Option<SyncOperation>,
}

impl<R, P, N> SyncController<R, P, N>
where
    R: Record,
    P: Persistence<R>,
    N: Notifier,
{
    pub fn new(persistence: P, notifier: N) -> Self {
        Self {
            list: OrderedDraftList::default(),
            persistence,
            notifier,
            loaded: false,
            in_flight: None,
            generation: 0,
            queued: Vec::new(),
            last_failure: None,
        }
    }

    pub fn list(&self) -> &OrderedDraftList<R> {
        &self.list
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn state(&self) -> SyncState {
        if !self.loaded {
            SyncState::Init
        } else if self.list.has_pending_changes() {
            SyncState::Dirty
        } else {
            SyncState::Clean
        }
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The request that failed most recently, cleared by the next success
    pub fn last_failure(&self) -> Option<SyncOperation> {
        self.last_failure
    }

    /// What a Retry should send: a load until one has succeeded or after a
    /// failed load, a save otherwise.
    pub fn retry_operation(&self) -> SyncOperation {
        if !self.loaded || self.last_failure == Some(SyncOperation::Load) {
            SyncOperation::Load
        } else {
            SyncOperation::Save
        }
    }

    /// Save is offered only for a dirty list with no save outstanding.
    pub fn can_save(&self) -> bool {
        self.state() == SyncState::Dirty && !self.is_saving()
    }

    /// Fetches the authoritative list and makes it the confirmed list,
    /// dropping any draft.
    pub async fn load(&mut self) -> Result<&[R], SyncError> {
        if self.is_saving() {
            return Err(self.reject(SyncOperation::Load, SyncError::Busy));
        }
        let outcome = self.persistence.load().await;
        self.finish_load(outcome)
    }

    /// Applies the result of a load started elsewhere.
    pub fn finish_load(&mut self, outcome: Result<Vec<R>, SyncError>) -> Result<&[R], SyncError> {
        if self.is_saving() {
            return Err(self.reject(SyncOperation::Load, SyncError::Busy));
        }
        match outcome {
            Ok(records) => {
                info!(kind = R::KIND, count = records.len(), "loaded list");
                self.reset(records);
                Ok(self.list.confirmed())
            }
            Err(err) => Err(self.reject(SyncOperation::Load, err)),
        }
    }

    /// Applies a background reload without notifying anyone. The result is
    /// dropped when it fails or when the list picked up edits or a save in
    /// the meantime. Returns whether the list was replaced.
    pub fn finish_refresh(&mut self, outcome: Result<Vec<R>, SyncError>) -> bool {
        match outcome {
            Ok(records) if self.state() == SyncState::Clean && !self.is_saving() => {
                debug!(kind = R::KIND, count = records.len(), "refreshed list");
                self.reset(records);
                true
            }
            Ok(_) => {
                debug!(kind = R::KIND, "list changed during refresh, keeping it");
                false
            }
            Err(err) => {
                warn!(kind = R::KIND, error = %err, "background refresh failed");
                false
            }
        }
    }

    /// Replaces the confirmed list without contacting the store.
    pub fn reset(&mut self, records: Vec<R>) {
        self.list.confirm(records);
        self.queued.clear();
        self.loaded = true;
        self.last_failure = None;
    }

    pub fn edit(&mut self, edit: Edit<R>) -> bool {
        let queued = self.in_flight.is_some().then(|| edit.clone());
        let changed = self.list.apply(edit);
        if let (true, Some(edit)) = (changed, queued) {
            debug!(kind = R::KIND, pending = self.queued.len() + 1, "queued edit behind in-flight save");
            self.queued.push(edit);
        }
        changed
    }

    pub fn append(&mut self, record: R) -> bool {
        self.edit(Edit::Append(record))
    }

    pub fn update(&mut self, index: usize, change: R::Change) -> bool {
        self.edit(Edit::Update { index, change })
    }

    pub fn move_row(&mut self, index: usize, direction: Direction) -> bool {
        self.edit(Edit::Move { index, direction })
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.edit(Edit::Remove(index))
    }

    /// Drops the draft without contacting the store.
    pub fn cancel(&mut self) {
        self.list.discard();
        self.queued.clear();
    }

    /// Validates the draft and marks a save as outstanding.
    ///
    /// Returns `Ok(None)` when there is nothing to save. Every rejection
    /// emits one notice.
    pub fn begin_save(&mut self) -> Result<Option<SaveTicket<R>>, SyncError> {
        if self.is_saving() {
            return Err(self.reject(SyncOperation::Save, SyncError::Busy));
        }
        let Some(draft) = self.list.draft() else {
            debug!(kind = R::KIND, "nothing to save");
            return Ok(None);
        };

        let issues = R::validate(draft);
        if !issues.is_empty() {
            return Err(self.reject(SyncOperation::Save, SyncError::Validation(issues)));
        }

        let records = draft.to_vec();
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.queued.clear();
        info!(kind = R::KIND, count = records.len(), "saving list");
        Ok(Some(SaveTicket {
            generation: self.generation,
            records,
        }))
    }

    /// Commits `ticket` on success; keeps the draft on failure.
    pub fn finish_save(
        &mut self,
        ticket: SaveTicket<R>,
        outcome: Result<SaveReceipt, SyncError>,
    ) -> Result<(), SyncError> {
        if self.in_flight != Some(ticket.generation) {
            warn!(kind = R::KIND, generation = ticket.generation, "ignoring stale save result");
            return Ok(());
        }
        self.in_flight = None;

        match outcome {
            Ok(receipt) => {
                let queued = std::mem::take(&mut self.queued);
                self.list.confirm(ticket.records);
                for edit in queued {
                    self.list.apply(edit);
                }
                self.last_failure = None;
                info!(kind = R::KIND, "save committed");
                let message = receipt.message.unwrap_or_else(|| R::SAVED_MESSAGE.to_string());
                self.notifier.notify(Notice::success(message));
                Ok(())
            }
            Err(err) => {
                self.queued.clear();
                Err(self.reject(SyncOperation::Save, err))
            }
        }
    }

    /// Saves the current draft; a clean list is left alone.
    pub async fn save(&mut self) -> Result<(), SyncError> {
        let Some(ticket) = self.begin_save()? else {
            return Ok(());
        };
        let outcome = self.persistence.save(ticket.records()).await;
        self.finish_save(ticket, outcome)
    }

    /// Repeats whichever request [`Self::retry_operation`] picks.
    pub async fn retry(&mut self) -> Result<(), SyncError> {
        match self.retry_operation() {
            SyncOperation::Load => self.load().await.map(|_| ()),
            SyncOperation::Save => self.save().await,
        }
    }

    fn reject(&mut self, operation: SyncOperation, err: SyncError) -> SyncError {
        warn!(kind = R::KIND, ?operation, error = %err, "sync failed");
        if err != SyncError::Busy {
            self.last_failure = Some(operation);
        }
        self.notifier.notify(Notice::from_error(&err));
        err
    }
}
