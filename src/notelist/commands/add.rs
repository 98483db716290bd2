use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::Note;
use crate::store::NoteStore;

/// Validate and store a note. Existing ids are kept (upsert).
pub async fn run(store: &dyn NoteStore, note: Note) -> Result<CmdResult> {
    if note.title.trim().is_empty() {
        return Err(NoteError::InvalidNote(
            "The title of the note can't be empty.".to_string(),
        ));
    }
    if note.content.trim().is_empty() {
        return Err(NoteError::InvalidNote(
            "The content of the note can't be empty.".to_string(),
        ));
    }

    let id = store.insert(note.clone()).await?;
    let saved = Note {
        id: Some(id),
        ..note
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note saved ({}): {}",
        id, saved.title
    )));
    Ok(result.with_affected_notes(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[tokio::test]
    async fn stores_note_and_reports_id() {
        let store = InMemoryStore::new();
        let result = run(&store, Note::new("Groceries", "Milk")).await.unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.affected_notes[0].id, Some(1));
        assert_eq!(store.notes().len(), 1);
        assert!(result.messages[0].content.contains("Groceries"));
    }

    #[tokio::test]
    async fn rejects_blank_title() {
        let store = InMemoryStore::new();
        match run(&store, Note::new("   ", "body")).await {
            Err(NoteError::InvalidNote(msg)) => assert!(msg.contains("title")),
            other => panic!("Expected InvalidNote, got {:?}", other),
        }
        assert!(store.notes().is_empty());
    }

    #[tokio::test]
    async fn rejects_blank_content() {
        let store = InMemoryStore::new();
        match run(&store, Note::new("Title", "")).await {
            Err(NoteError::InvalidNote(msg)) => assert!(msg.contains("content")),
            other => panic!("Expected InvalidNote, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn editing_keeps_identity() {
        let store = InMemoryStore::new();
        run(&store, Note::new("Draft", "v1")).await.unwrap();
        let result = run(&store, Note::new("Draft", "v2").with_id(1))
            .await
            .unwrap();

        assert_eq!(result.affected_notes[0].id, Some(1));
        let notes = store.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "v2");
    }
}
