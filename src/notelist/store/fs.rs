use super::{Collection, NoteStore, NotesReceiver};
use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::{watch, Mutex};

const DATA_FILENAME: &str = "notes.json";

/// Note store backed by a single JSON file.
///
/// The collection is loaded once on open and rewritten on every change.
/// Writes go to a temp file that is then renamed over `notes.json`, so a
/// crash mid-write leaves the previous collection intact.
pub struct FileStore {
    root: PathBuf,
    collection: Mutex<Collection>,
    live: watch::Sender<Vec<Note>>,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let notes = load_notes(&root)?;
        tracing::debug!(path = %root.display(), count = notes.len(), "Opened note store");

        let collection = Collection::from_notes(notes)?;
        let (live, _) = watch::channel(collection.snapshot());
        Ok(Self {
            root,
            collection: Mutex::new(collection),
            live,
        })
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    async fn persist(&self, notes: &[Note]) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let content = serde_json::to_string_pretty(notes)?;
        let tmp = self.root.join(format!("{}.tmp", DATA_FILENAME));
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, self.data_file()).await?;
        Ok(())
    }
}

fn load_notes(root: &Path) -> Result<Vec<Note>> {
    let data_file = root.join(DATA_FILENAME);
    if !data_file.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(data_file).map_err(NoteError::Io)?;
    let notes: Vec<Note> = serde_json::from_str(&content).map_err(NoteError::Serialization)?;
    Ok(notes)
}

#[async_trait]
impl NoteStore for FileStore {
    fn observe_all(&self) -> NotesReceiver {
        self.live.subscribe()
    }

    async fn get_by_id(&self, id: NoteId) -> Result<Option<Note>> {
        Ok(self.collection.lock().await.get(id).cloned())
    }

    async fn insert(&self, note: Note) -> Result<NoteId> {
        let mut collection = self.collection.lock().await;
        let previous = note.id.and_then(|id| collection.get(id).cloned());
        let id = collection.upsert(note)?;
        let snapshot = collection.snapshot();

        if let Err(e) = self.persist(&snapshot).await {
            // Roll back so memory never runs ahead of disk
            collection.remove(id);
            if let Some(previous) = previous {
                collection.restore(id, previous);
            }
            return Err(e);
        }

        self.live.send_replace(snapshot);
        Ok(id)
    }

    async fn delete(&self, note: &Note) -> Result<()> {
        let id = note
            .id
            .ok_or_else(|| NoteError::InvalidNote("Note has no identity".to_string()))?;
        let mut collection = self.collection.lock().await;
        let removed = collection.remove(id).ok_or(NoteError::NoteNotFound(id))?;
        let snapshot = collection.snapshot();

        if let Err(e) = self.persist(&snapshot).await {
            collection.restore(id, removed);
            return Err(e);
        }

        self.live.send_replace(snapshot);
        Ok(())
    }
}
