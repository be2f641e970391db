//! In-memory persistence
//!
//! Stand-in store used by tests and by the editor before the host
//! configuration is available. Failures can be scripted per call.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::Record;
use crate::error::SyncError;
use crate::sync::{Persistence, SaveReceipt};

#[derive(Debug)]
struct Inner<R> {
    stored: RefCell<Vec<R>>,
    load_failures: RefCell<VecDeque<SyncError>>,
    save_failures: RefCell<VecDeque<SyncError>>,
    save_message: RefCell<Option<String>>,
    save_calls: Cell<usize>,
}

/// Clones share the same store.
#[derive(Debug)]
pub struct MemoryPersistence<R> {
    inner: Rc<Inner<R>>,
}

impl<R> Clone for MemoryPersistence<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Record> MemoryPersistence<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            inner: Rc::new(Inner {
                stored: RefCell::new(records),
                load_failures: RefCell::new(VecDeque::new()),
                save_failures: RefCell::new(VecDeque::new()),
                save_message: RefCell::new(None),
                save_calls: Cell::new(0),
            }),
        }
    }

    pub fn stored(&self) -> Vec<R> {
        self.inner.stored.borrow().clone()
    }

    pub fn save_calls(&self) -> usize {
        self.inner.save_calls.get()
    }

    pub fn fail_next_load(&self, err: SyncError) {
        self.inner.load_failures.borrow_mut().push_back(err);
    }

    pub fn fail_next_save(&self, err: SyncError) {
        self.inner.save_failures.borrow_mut().push_back(err);
    }

    pub fn set_save_message(&self, message: impl Into<String>) {
        *self.inner.save_message.borrow_mut() = Some(message.into());
    }
}

#[async_trait(?Send)]
impl<R: Record> Persistence<R> for MemoryPersistence<R> {
    async fn load(&self) -> Result<Vec<R>, SyncError> {
        if let Some(err) = self.inner.load_failures.borrow_mut().pop_front() {
            return Err(err);
        }
        Ok(self.stored())
    }

    async fn save(&self, records: &[R]) -> Result<SaveReceipt, SyncError> {
        self.inner.save_calls.set(self.inner.save_calls.get() + 1);
        if let Some(err) = self.inner.save_failures.borrow_mut().pop_front() {
            return Err(err);
        }
        // New rows get identities the way the server would hand them out
        let mut next = self.inner.stored.borrow().iter().map(Record::id).max().unwrap_or(0);
        let saved = records
            .iter()
            .cloned()
            .map(|mut record| {
                if record.is_new() {
                    next += 1;
                    record.assign_id(next);
                }
                record
            })
            .collect();
        *self.inner.stored.borrow_mut() = saved;
        Ok(SaveReceipt {
            message: self.inner.save_message.borrow().clone(),
        })
    }
}
