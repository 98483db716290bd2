use crate::commands::CmdResult;
use crate::error::{NoteError, Result};
use crate::model::NoteId;
use crate::store::NoteStore;

pub async fn run(store: &dyn NoteStore, id: NoteId) -> Result<CmdResult> {
    let note = store
        .get_by_id(id)
        .await?
        .ok_or(NoteError::NoteNotFound(id))?;
    Ok(CmdResult::default().with_listed_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::memory::InMemoryStore;

    #[tokio::test]
    async fn returns_stored_note() {
        let store = InMemoryStore::with_notes(vec![Note::new("Found", "it")]).unwrap();
        let result = run(&store, 1).await.unwrap();
        assert_eq!(result.listed_notes[0].title, "Found");
    }

    #[tokio::test]
    async fn missing_note_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, 3).await,
            Err(NoteError::NoteNotFound(3))
        ));
    }
}
