use super::machine::NotesMachine;
use super::{NotesEvent, NotesState};
use crate::config::NotesConfig;
use crate::error::{NoteError, Result};
use crate::model::Note;
use crate::store::{NoteStore, NotesReceiver};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

struct Envelope {
    event: NotesEvent,
    done: Option<oneshot::Sender<()>>,
}

/// Handle to a running notes state machine.
///
/// Spawning subscribes to the store once and starts the task that owns all
/// note list state. The handle only offers read access to that state plus
/// the event entry points. Dropping the handle stops the task.
pub struct NotesController {
    events: mpsc::Sender<Envelope>,
    state: watch::Receiver<NotesState>,
    recently_deleted: watch::Receiver<Option<Note>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl NotesController {
    /// Start the machine on the current tokio runtime.
    ///
    /// The store's current collection is sorted and published before this
    /// returns, so the first [`state`](Self::state) read is never empty
    /// just because the task has not run yet.
    pub fn spawn(store: Arc<dyn NoteStore>, config: &NotesConfig) -> Self {
        let mut notes_rx = store.observe_all();
        let initial = notes_rx.borrow_and_update().clone();

        let mut state = NotesState::with_order(config.default_order);
        state.notes = state.note_order.sorted(&initial);

        let (state_tx, state_rx) = watch::channel(state);
        let (deleted_tx, deleted_rx) = watch::channel(None);
        let (events_tx, events_rx) = mpsc::channel(config.event_buffer());
        let cancel = CancellationToken::new();

        let machine = NotesMachine::new(store, initial, state_tx, deleted_tx);
        let task = tokio::spawn(run(machine, events_rx, notes_rx, cancel.clone()));

        Self {
            events: events_tx,
            state: state_rx,
            recently_deleted: deleted_rx,
            cancel,
            task: Some(task),
        }
    }

    /// Subscribe to the published state.
    pub fn state(&self) -> watch::Receiver<NotesState> {
        self.state.clone()
    }

    /// Copy of the latest published state.
    pub fn snapshot(&self) -> NotesState {
        self.state.borrow().clone()
    }

    /// The note an undo would bring back, if any.
    pub fn recently_deleted(&self) -> Option<Note> {
        self.recently_deleted.borrow().clone()
    }

    /// Queue an event without waiting for it to be handled.
    pub async fn on_event(&self, event: NotesEvent) -> Result<()> {
        self.events
            .send(Envelope { event, done: None })
            .await
            .map_err(|_| NoteError::ControllerClosed)
    }

    /// Queue an event and wait until the machine has fully handled it,
    /// store call included.
    pub async fn dispatch(&self, event: NotesEvent) -> Result<()> {
        let (done, handled) = oneshot::channel();
        self.events
            .send(Envelope {
                event,
                done: Some(done),
            })
            .await
            .map_err(|_| NoteError::ControllerClosed)?;
        handled.await.map_err(|_| NoteError::ControllerClosed)
    }

    /// Stop the machine and wait for its task to finish.
    ///
    /// An event already being handled runs to completion first.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Notes controller task ended abnormally");
            }
        }
    }
}

impl Drop for NotesController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(
    mut machine: NotesMachine,
    mut events: mpsc::Receiver<Envelope>,
    mut notes: NotesReceiver,
    cancel: CancellationToken,
) {
    let mut observing = true;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Notes controller cancelled");
                break;
            }
            changed = notes.changed(), if observing => match changed {
                Ok(()) => {
                    let latest = notes.borrow_and_update().clone();
                    machine.on_notes(latest);
                }
                Err(_) => {
                    tracing::warn!("Note store closed its live collection");
                    observing = false;
                }
            },
            envelope = events.recv() => match envelope {
                Some(Envelope { event, done }) => {
                    machine.on_event(event).await;
                    if let Some(done) = done {
                        let _ = done.send(());
                    }
                }
                None => break,
            },
        }
    }
}
