use clap::Parser;
use directories::ProjectDirs;
use notelist::api::NotesApi;
use notelist::config::NotesConfig;
use notelist::error::{NoteError, Result};
use notelist::model::{Note, NoteId, NOTE_COLORS};
use notelist::order::NoteOrder;
use notelist::store::fs::FileStore;
use std::path::PathBuf;
use std::sync::Arc;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_full_note, print_messages, print_notes};

const HOME_ENV: &str = "NOTELIST_HOME";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    notelist::logging::init(cli.verbose);
    let api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            color,
        }) => handle_add(&api, title, content, color).await,
        Some(Commands::List { order }) => handle_list(&api, order),
        Some(Commands::Show { id }) => handle_show(&api, id).await,
        Some(Commands::Delete { ids }) => handle_delete(&api, &ids).await,
        Some(Commands::Shell) => cli::shell::run(&api).await,
        None => handle_list(&api, None),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "notelist", "notelist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NoteError::Api("Could not determine data dir".into()))
}

fn init_api(cli: &Cli) -> Result<NotesApi> {
    let dir = data_dir(cli)?;
    let config = NotesConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring unreadable config");
        NotesConfig::default()
    });
    let store = FileStore::open(&dir)?;
    tracing::debug!(path = %store.data_file().display(), "Using note store");
    Ok(NotesApi::new(Arc::new(store), config))
}

async fn handle_add(
    api: &NotesApi,
    title: String,
    content: String,
    color: Option<i32>,
) -> Result<()> {
    let note = Note::new(title, content).with_color(color.unwrap_or(NOTE_COLORS[0]));
    let result = api.add_note(note).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &NotesApi, order: Option<NoteOrder>) -> Result<()> {
    let result = api.list_notes(order)?;
    print_notes(&result.listed_notes, false);
    print_messages(&result.messages);
    Ok(())
}

async fn handle_show(api: &NotesApi, id: NoteId) -> Result<()> {
    let result = api.get_note(id).await?;
    for note in &result.listed_notes {
        print_full_note(note);
    }
    Ok(())
}

async fn handle_delete(api: &NotesApi, ids: &[NoteId]) -> Result<()> {
    let result = api.delete_notes(ids).await?;
    print_messages(&result.messages);
    Ok(())
}
