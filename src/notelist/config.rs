use crate::error::{NoteError, Result};
use crate::order::NoteOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EVENT_BUFFER: usize = 32;

/// Configuration for notelist, stored in `<data dir>/config.json`.
///
/// Fields missing from the file take their value from [`NotesConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotesConfig {
    /// Ordering a freshly started controller applies
    pub default_order: NoteOrder,

    /// How many user events may queue before `on_event` waits
    pub event_buffer: usize,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            default_order: NoteOrder::default(),
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }
}

impl NotesConfig {
    /// Read `config.json` from `data_dir`. No file means all defaults.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        match fs::read_to_string(data_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(NoteError::Io(e)),
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NoteError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NoteError::Serialization)?;
        fs::write(config_path, content).map_err(NoteError::Io)?;
        Ok(())
    }

    /// Channel capacity, never zero
    pub fn event_buffer(&self) -> usize {
        self.event_buffer.max(1)
    }
}
