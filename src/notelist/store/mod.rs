//! # Storage Layer
//!
//! The [`NoteStore`] trait is everything the rest of the crate knows about
//! persistence. It offers two kinds of access:
//!
//! - a **live collection** ([`NoteStore::observe_all`]): a `watch` receiver
//!   holding the full current collection. Every write replaces the value, so
//!   observers always see whole collections, never deltas. A fresh receiver
//!   starts with the current collection.
//! - **point operations** by identity: fetch, insert, delete.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: process-local, used by tests and the
//!   in-memory API facade.
//! - [`fs::FileStore`]: the collection kept as JSON in `notes.json`.
//!
//! ## Identity
//!
//! Inserting a note without an id lets the store allocate one. Inserting a
//! note that already carries an id is an upsert: the note keeps its id and
//! replaces whatever was stored under it. Restoring a deleted note relies
//! on this to bring it back unchanged.

use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::watch;

pub mod fs;
pub mod memory;

/// Receiver side of a store's live collection.
pub type NotesReceiver = watch::Receiver<Vec<Note>>;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Subscribe to the full collection.
    fn observe_all(&self) -> NotesReceiver;

    /// Fetch a note by id, `None` if absent.
    async fn get_by_id(&self, id: NoteId) -> Result<Option<Note>>;

    /// Insert or upsert a note, returning its id.
    async fn insert(&self, note: Note) -> Result<NoteId>;

    /// Delete the note stored under `note.id`.
    async fn delete(&self, note: &Note) -> Result<()>;
}

/// Collection state shared by the store implementations.
#[derive(Debug, Default)]
pub(crate) struct Collection {
    notes: BTreeMap<NoteId, Note>,
    last_id: NoteId,
}

impl Collection {
    pub(crate) fn from_notes(notes: Vec<Note>) -> Result<Self> {
        let mut collection = Self::default();
        for note in notes {
            collection.upsert(note)?;
        }
        Ok(collection)
    }

    pub(crate) fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    /// Stores `note`, allocating an id when it has none.
    pub(crate) fn upsert(&mut self, mut note: Note) -> Result<NoteId> {
        let id = match note.id {
            Some(id) => id,
            None => self
                .last_id
                .checked_add(1)
                .ok_or_else(|| NoteError::Store("Note id space exhausted".to_string()))?,
        };
        self.last_id = self.last_id.max(id);
        note.id = Some(id);
        self.notes.insert(id, note);
        Ok(id)
    }

    /// Puts a removed note back under `id`, without touching allocation.
    pub(crate) fn restore(&mut self, id: NoteId, mut note: Note) {
        note.id = Some(id);
        self.notes.insert(id, note);
    }

    pub(crate) fn remove(&mut self, id: NoteId) -> Option<Note> {
        self.notes.remove(&id)
    }

    /// Snapshot in id order.
    pub(crate) fn snapshot(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_ids_past_the_highest_seen() {
        let mut collection = Collection::from_notes(vec![Note::new("a", "").with_id(7)]).unwrap();
        let id = collection.upsert(Note::new("b", "")).unwrap();
        assert_eq!(id, 8);
    }

    #[test]
    fn allocation_past_max_id_fails_without_overwriting() {
        let mut collection =
            Collection::from_notes(vec![Note::new("max", "").with_id(i64::MAX)]).unwrap();

        let result = collection.upsert(Note::new("next", ""));
        assert!(matches!(result, Err(NoteError::Store(_))));

        // Explicit ids still work, and nothing was clobbered
        collection.upsert(Note::new("low", "").with_id(i64::MIN)).unwrap();
        assert!(matches!(
            collection.upsert(Note::new("again", "")),
            Err(NoteError::Store(_))
        ));
        let snapshot = collection.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(collection.get(i64::MIN).unwrap().title, "low");
        assert_eq!(collection.get(i64::MAX).unwrap().title, "max");
    }

    #[test]
    fn upsert_with_id_replaces_existing() {
        let mut collection = Collection::default();
        let id = collection.upsert(Note::new("first", "")).unwrap();
        collection.upsert(Note::new("second", "").with_id(id)).unwrap();

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "second");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut collection = Collection::default();
        let first = collection.upsert(Note::new("a", "")).unwrap();
        collection.remove(first);
        let second = collection.upsert(Note::new("b", "")).unwrap();
        assert_ne!(first, second);
    }
}
