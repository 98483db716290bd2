use clap::{Parser, Subcommand};
use notelist::model::NoteId;
use notelist::order::NoteOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notelist")]
#[command(about = "Ordered note list with delete and undo", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes.json and config.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "n")]
    Add {
        /// Title of the note
        title: String,

        /// Content of the note
        content: String,

        /// ARGB color tag (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_color)]
        color: Option<i32>,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Sort as field[:asc|desc], e.g. title:asc (default from config)
        #[arg(short, long)]
        order: Option<NoteOrder>,
    },

    /// Show one note
    #[command(alias = "v")]
    Show { id: NoteId },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Note ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<NoteId>,
    },

    /// Interactive list with reordering and undo
    Shell,
}

fn parse_color(s: &str) -> Result<i32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).map(|v| v as i32),
        None => s.parse::<i32>(),
    };
    parsed.map_err(|e| format!("Invalid color {}: {}", s, e))
}
