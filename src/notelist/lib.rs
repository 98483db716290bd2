//! # Notelist Architecture
//!
//! Notelist is a **UI-agnostic note list library**: it keeps an ordered view
//! of a persisted note collection, lets the user re-order it, and supports
//! deleting a note with a one-step undo. The bundled CLI is just one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and the notes controller       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Commands (commands/*.rs)    │ │  Notes state machine       │
//! │  add / get / delete / list   │ │  (notes/) ordering, undo   │
//! └──────────────────────────────┘ └────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait: live collection + point operations      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The notes state machine
//!
//! [`notes::NotesController`] is the heart of the crate. It subscribes to the
//! store's live collection once, sorts every emission by the active
//! [`order::NoteOrder`], and folds user events ([`notes::NotesEvent`]) into a
//! single published [`notes::NotesState`]. See the `notes` module docs for
//! which input writes which field.
//!
//! ## No I/O assumptions in core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides where
//! they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Use cases (add, get, delete, list)
//! - [`notes`]: The note list state machine
//! - [`order`]: Sort field and direction
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Note` type and its color palette
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod notes;
pub mod order;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
