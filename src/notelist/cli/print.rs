use chrono::{DateTime, Utc};
use colored::Colorize;
use notelist::api::{CmdMessage, MessageLevel, NotesState};
use notelist::model::Note;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const COLOR_WIDTH: usize = 9;
const UNDO_HINT: &str = "Note deleted. Type `undo` to bring it back.";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_full_note(note: &Note) {
    let id = note.id.map(|id| id.to_string()).unwrap_or_default();
    println!("{} {}", id.yellow(), note.title.bold());
    println!(
        "{}",
        format!("{} · {}", note.color_label(), format_time_ago(note.timestamp)).dimmed()
    );
    println!("--------------------------------");
    println!("{}", note.content);
}

/// One line per note. With `positions`, lines are numbered 1.. in view order
/// instead of by id, which is what the shell's `delete <n>` expects.
pub(crate) fn print_notes(notes: &[Note], positions: bool) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        let idx_str = if positions {
            format!("{}. ", i + 1)
        } else {
            format!("{}. ", note.id.unwrap_or_default())
        };

        let content_preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if content_preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, content_preview)
        };

        let fixed_width = 4 + idx_str.width() + COLOR_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "    {}{}{}{:>width$}{}",
            idx_str.yellow(),
            title_display,
            " ".repeat(padding),
            note.color_label(),
            format_time_ago(note.timestamp).dimmed(),
            width = COLOR_WIDTH
        );
    }
}

pub(crate) fn print_state(state: &NotesState, recently_deleted: Option<&Note>) {
    println!("{}", format!("Sorted by {}", state.note_order).dimmed());
    if state.is_order_section_visible {
        println!(
            "{}",
            "  order <title|date|color> [asc|desc]   toggle to hide".cyan()
        );
    }
    print_notes(&state.notes, true);
    if recently_deleted.is_some() {
        println!("{}", UNDO_HINT.yellow());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp_millis: i64) -> String {
    let Some(timestamp) = DateTime::<Utc>::from_timestamp_millis(timestamp_millis) else {
        return format!("{:>width$}", "?", width = TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
