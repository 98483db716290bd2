use super::{Collection, NoteStore, NotesReceiver};
use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::watch;

/// Process-local note store.
///
/// A `std::sync::Mutex` is enough here: no lock is held across an await.
pub struct InMemoryStore {
    collection: Mutex<Collection>,
    live: watch::Sender<Vec<Note>>,
    simulate_write_error: AtomicBool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::from_collection(Collection::default())
    }

    /// Seed the store. Notes without ids get fresh ones.
    pub fn with_notes(notes: Vec<Note>) -> Result<Self> {
        Ok(Self::from_collection(Collection::from_notes(notes)?))
    }

    fn from_collection(collection: Collection) -> Self {
        let (live, _) = watch::channel(collection.snapshot());
        Self {
            collection: Mutex::new(collection),
            live,
            simulate_write_error: AtomicBool::new(false),
        }
    }

    /// Make every following insert/delete fail until switched off.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Current collection in id order.
    pub fn notes(&self) -> Vec<Note> {
        self.live.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(NoteError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Collection>> {
        self.collection
            .lock()
            .map_err(|_| NoteError::Store("Note collection lock poisoned".to_string()))
    }
}

#[async_trait]
impl NoteStore for InMemoryStore {
    fn observe_all(&self) -> NotesReceiver {
        self.live.subscribe()
    }

    async fn get_by_id(&self, id: NoteId) -> Result<Option<Note>> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn insert(&self, note: Note) -> Result<NoteId> {
        self.check_writable()?;
        let mut collection = self.lock()?;
        let id = collection.upsert(note)?;
        self.live.send_replace(collection.snapshot());
        Ok(id)
    }

    async fn delete(&self, note: &Note) -> Result<()> {
        self.check_writable()?;
        let id = note
            .id
            .ok_or_else(|| NoteError::InvalidNote("Note has no identity".to_string()))?;
        let mut collection = self.lock()?;
        if collection.remove(id).is_none() {
            return Err(NoteError::NoteNotFound(id));
        }
        self.live.send_replace(collection.snapshot());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_id_and_emits_collection() {
        let store = InMemoryStore::new();
        let mut rx = store.observe_all();
        assert!(rx.borrow_and_update().is_empty());

        let id = store.insert(Note::new("Title", "Body")).await.unwrap();
        assert_eq!(id, 1);
        assert!(rx.has_changed().unwrap());

        let notes = rx.borrow_and_update().clone();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, Some(1));
    }

    #[tokio::test]
    async fn new_subscriber_sees_current_collection() {
        let store = InMemoryStore::with_notes(vec![Note::new("a", ""), Note::new("b", "")]).unwrap();
        let rx = store.observe_all();
        assert_eq!(rx.borrow().len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_when_missing() {
        let store = InMemoryStore::new();
        assert!(store.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let store = InMemoryStore::new();
        let ghost = Note::new("ghost", "").with_id(9);
        match store.delete(&ghost).await {
            Err(NoteError::NoteNotFound(id)) => assert_eq!(id, 9),
            other => panic!("Expected NoteNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_without_identity_is_rejected() {
        let store = InMemoryStore::new();
        let result = store.delete(&Note::new("unsaved", "")).await;
        assert!(matches!(result, Err(NoteError::InvalidNote(_))));
    }

    #[tokio::test]
    async fn reinsert_keeps_original_identity() {
        let store = InMemoryStore::new();
        let id = store.insert(Note::new("keep", "me")).await.unwrap();
        let note = store.get_by_id(id).await.unwrap().unwrap();

        store.delete(&note).await.unwrap();
        assert!(store.notes().is_empty());

        let restored = store.insert(note.clone()).await.unwrap();
        assert_eq!(restored, id);
        assert_eq!(store.notes(), vec![note]);
    }

    #[tokio::test]
    async fn simulated_write_error_blocks_writes() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(matches!(
            store.insert(Note::new("a", "")).await,
            Err(NoteError::Store(_))
        ));
        assert!(store.notes().is_empty());

        store.set_simulate_write_error(false);
        assert!(store.insert(Note::new("a", "")).await.is_ok());
    }
}
