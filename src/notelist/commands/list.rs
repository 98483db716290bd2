use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::order::NoteOrder;
use crate::store::NoteStore;

/// One sorted snapshot of the collection.
pub fn run(store: &dyn NoteStore, order: NoteOrder) -> Result<CmdResult> {
    let notes = store.observe_all().borrow().clone();
    let mut result = CmdResult::default().with_listed_notes(order.sorted(&notes));
    if !result.listed_notes.is_empty() {
        result.add_message(CmdMessage::info(format!("Sorted by {}", order)));
    }
    Ok(result)
}
