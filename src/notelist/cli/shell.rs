//! Interactive front end for the notes controller.
//!
//! Each input line becomes one controller event (or an API call for `add`),
//! after which the current state is printed. Positions used by `delete` refer
//! to the list as last printed.

use super::print::{print_messages, print_state};
use colored::Colorize;
use notelist::api::{NotesApi, NotesEvent, NotesState};
use notelist::error::Result;
use notelist::model::Note;
use notelist::notes::NotesController;
use notelist::order::{NoteOrder, OrderType};
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// How long to wait for the store to echo a delete or restore into the list.
const SETTLE_TIMEOUT: Duration = Duration::from_millis(500);

const HELP: &str = "\
commands:
  list                               show the notes
  order <title|date|color> [asc|desc]
  toggle                             show/hide the order controls
  add <title> | <content>
  delete <n>                         delete the n-th listed note
  undo                               restore the last deleted note
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    List,
    Order(NoteOrder),
    Toggle,
    Add { title: String, content: String },
    Delete(usize),
    Undo,
    Help,
    Quit,
}

pub(crate) fn parse_line(line: &str) -> std::result::Result<ShellCommand, String> {
    let line = line.trim();
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match head {
        "" | "list" | "ls" => Ok(ShellCommand::List),
        "toggle" => Ok(ShellCommand::Toggle),
        "undo" | "restore" => Ok(ShellCommand::Undo),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        "order" => {
            let mut parts = rest.split_whitespace();
            let field = parts.next().ok_or("order needs a field")?;
            let order = NoteOrder::from_str(field)?;
            let order = match parts.next() {
                Some(direction) => order.with_order_type(OrderType::from_str(direction)?),
                None => order,
            };
            Ok(ShellCommand::Order(order))
        }
        "delete" | "rm" => rest
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(ShellCommand::Delete)
            .ok_or_else(|| format!("Invalid position: {}", rest)),
        "add" => {
            let (title, content) = rest.split_once('|').unwrap_or((rest, ""));
            Ok(ShellCommand::Add {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            })
        }
        other => Err(format!("Unknown command: {} (try `help`)", other)),
    }
}

pub(crate) async fn run(api: &NotesApi) -> Result<()> {
    let controller = api.controller();
    print_state(&controller.snapshot(), None);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e.red());
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        if let Err(e) = execute(api, &controller, command).await {
            eprintln!("{}", format!("Error: {}", e).red());
        }
    }

    controller.shutdown().await;
    Ok(())
}

async fn execute(
    api: &NotesApi,
    controller: &NotesController,
    command: ShellCommand,
) -> Result<()> {
    match command {
        ShellCommand::List => {}
        ShellCommand::Help => {
            println!("{}", HELP);
            return Ok(());
        }
        ShellCommand::Order(order) => controller.dispatch(NotesEvent::Order(order)).await?,
        ShellCommand::Toggle => controller.dispatch(NotesEvent::ToggleOrderSection).await?,
        ShellCommand::Add { title, content } => {
            let result = api.add_note(Note::new(title, content)).await?;
            print_messages(&result.messages);
            if let Some(id) = result.affected_notes.first().and_then(|n| n.id) {
                settle(controller, |s| s.notes.iter().any(|n| n.id == Some(id))).await;
            }
        }
        ShellCommand::Delete(position) => {
            let snapshot = controller.snapshot();
            let Some(note) = snapshot.notes.get(position - 1).cloned() else {
                eprintln!("{}", format!("No note at position {}", position).red());
                return Ok(());
            };
            let id = note.id;
            controller.dispatch(NotesEvent::DeleteNote(note)).await?;
            settle(controller, |s| s.notes.iter().all(|n| n.id != id)).await;
        }
        ShellCommand::Undo => {
            let Some(pending) = controller.recently_deleted() else {
                println!("{}", "Nothing to undo.".dimmed());
                return Ok(());
            };
            controller.dispatch(NotesEvent::RestoreNote).await?;
            settle(controller, |s| s.notes.iter().any(|n| n.id == pending.id)).await;
        }
        ShellCommand::Quit => return Ok(()),
    }

    print_state(&controller.snapshot(), controller.recently_deleted().as_ref());
    Ok(())
}

/// Wait until the published state satisfies `ready`, giving up quietly after
/// [`SETTLE_TIMEOUT`] (a failed store call never produces the change).
async fn settle(controller: &NotesController, ready: impl FnMut(&NotesState) -> bool) {
    let mut rx = controller.state();
    if tokio::time::timeout(SETTLE_TIMEOUT, rx.wait_for(ready))
        .await
        .is_err()
    {
        tracing::debug!("Note list did not settle in time");
    }
}
