//! # Cartz Architecture
//!
//! Cartz is a **UI-agnostic shopping-list library**. The interactive
//! terminal session the binary provides is just one client; the core
//! never assumes a terminal, stdout, or exit codes.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses session input, renders the list, prompts          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Boundary types: integer ids, name/quantity as text       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / begin+finish edit / remove / list                  │
//! │  - Validation and the one-editing-item invariant live here  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait, MemoryStore implementation     │
//! │  - Snapshot-on-read; updates replace whole items by id      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keeping a UI in sync
//!
//! Every mutating command returns a [`commands::CmdResult`] carrying the
//! full post-mutation snapshot in insertion order. A rendering layer
//! redraws from that snapshot after each call (or polls
//! [`api::CartzApi::list_items`], which is idempotent). There is no
//! callback registry: the intended caller is a single-threaded event
//! loop that already knows when it mutated something.
//!
//! ## Invariants
//!
//! - Item ids are unique for the store's lifetime; the counter never
//!   rewinds after a removal.
//! - At most one item is in edit mode at any time, enforced inside
//!   `edit::begin` / `edit::finish` rather than by the caller.
//! - Committed names are non-blank and trimmed; quantities are whole
//!   numbers of 0 or more. A failed operation changes nothing.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Item`, `ItemId`)
//! - [`error`]: Error types
//! - `args`/`main`: Session parsing and rendering for the binary (not
//!   part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
