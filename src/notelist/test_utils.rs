use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::store::memory::InMemoryStore;
use crate::store::{NoteStore, NotesReceiver};
use async_trait::async_trait;
use std::sync::Mutex;

/// A point operation as seen by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    GetById(NoteId),
    Insert(Note),
    Delete(Note),
}

/// Wraps an [`InMemoryStore`] and logs every point operation, failed ones
/// included, in call order.
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryStore,
    calls: Mutex<Vec<StoreCall>>,
}

impl RecordingStore {
    pub fn with_notes(notes: Vec<Note>) -> Result<Self> {
        Ok(Self {
            inner: InMemoryStore::with_notes(notes)?,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: StoreCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl NoteStore for RecordingStore {
    fn observe_all(&self) -> NotesReceiver {
        self.inner.observe_all()
    }

    async fn get_by_id(&self, id: NoteId) -> Result<Option<Note>> {
        self.record(StoreCall::GetById(id));
        self.inner.get_by_id(id).await
    }

    async fn insert(&self, note: Note) -> Result<NoteId> {
        self.record(StoreCall::Insert(note.clone()));
        self.inner.insert(note).await
    }

    async fn delete(&self, note: &Note) -> Result<()> {
        self.record(StoreCall::Delete(note.clone()));
        self.inner.delete(note).await
    }
}
