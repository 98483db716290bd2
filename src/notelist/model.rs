use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Store-assigned note identity.
pub type NoteId = i64;

pub const RED_ORANGE: i32 = 0xFFFF_AB91_u32 as i32;
pub const LIGHT_GREEN: i32 = 0xFFE7_ED9B_u32 as i32;
pub const VIOLET: i32 = 0xFFCF_94DA_u32 as i32;
pub const BABY_BLUE: i32 = 0xFF81_DEEA_u32 as i32;
pub const RED_PINK: i32 = 0xFFF4_8FB1_u32 as i32;

/// ARGB colors offered to new notes, in picker order.
pub const NOTE_COLORS: [i32; 5] = [RED_ORANGE, LIGHT_GREEN, VIOLET, BABY_BLUE, RED_PINK];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// `None` until the store persists the note for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub color: i32,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
            color: NOTE_COLORS[0],
        }
    }

    pub fn with_color(mut self, color: i32) -> Self {
        self.color = color;
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = Some(id);
        self
    }

    /// Hex label for the color tag, e.g. `#FFAB91`.
    pub fn color_label(&self) -> String {
        format!("#{:06X}", (self.color as u32) & 0x00FF_FFFF)
    }
}
