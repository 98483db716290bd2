use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::NoteId;
use crate::store::NoteStore;
use std::collections::HashSet;

/// Delete the notes with the given ids.
///
/// Repeated ids are handled once. Unknown ids are reported as warnings, and
/// fail the command only when none of the ids matched a note.
pub async fn run(store: &dyn NoteStore, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut seen = HashSet::new();
    let mut missing = Vec::new();

    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        let Some(note) = store.get_by_id(id).await? else {
            missing.push(id);
            continue;
        };
        store.delete(&note).await?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            id, note.title
        )));
        result.affected_notes.push(note);
    }

    if let Some(&first) = missing.first() {
        if result.affected_notes.is_empty() {
            return Err(NoteError::NoteNotFound(first));
        }
    }
    for id in missing {
        result.add_message(CmdMessage::warning(format!("Note not found: {}", id)));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::{RecordingStore, StoreCall};

    #[tokio::test]
    async fn removes_notes_from_store() {
        let store = InMemoryStore::with_notes(vec![
            Note::new("A", "a"),
            Note::new("B", "b"),
            Note::new("C", "c"),
        ])
        .unwrap();
        let result = run(&store, &[1, 3]).await.unwrap();

        assert_eq!(result.affected_notes.len(), 2);
        let remaining: Vec<_> = store.notes().into_iter().map(|n| n.title).collect();
        assert_eq!(remaining, vec!["B"]);
    }

    #[tokio::test]
    async fn unknown_id_fails() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, &[5]).await,
            Err(NoteError::NoteNotFound(5))
        ));
    }

    #[tokio::test]
    async fn repeated_id_is_deleted_once() {
        let store = RecordingStore::with_notes(vec![Note::new("A", "a")]).unwrap();
        let result = run(&store, &[1, 1]).await.unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Note deleted (1): A");

        let note = result.affected_notes[0].clone();
        assert_eq!(
            store.calls(),
            vec![StoreCall::GetById(1), StoreCall::Delete(note)]
        );
        assert!(store.inner().notes().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_among_known_ones_is_a_warning() {
        let store = InMemoryStore::with_notes(vec![Note::new("A", "a"), Note::new("B", "b")])
            .unwrap();
        let result = run(&store, &[1, 9, 2]).await.unwrap();

        assert_eq!(result.affected_notes.len(), 2);
        assert!(store.notes().is_empty());
        let warnings: Vec<_> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(warnings, vec!["Note not found: 9"]);
    }
}
