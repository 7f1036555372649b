//! Durable storage for the dynamic table editor.
//!
//! The whole [`TableState`](dyntable_model::TableState) is stored as one JSON
//! document under a fixed key in a [`DurableSlot`]. It is read once at session
//! start and overwritten after every edit.
//!
//! # Format
//!
//! ```text
//! {"rows":[{"id":1,"label1":"A","label2":["X"]}],
//!  "column1Options":["A","B"],"column2Options":["X","Y"]}
//! ```
//!
//! There is no version field.
//!
//! # Example
//!
//! ```ignore
//! use dyntable_core::EditController;
//! use dyntable_persistence::{FileSlot, SlotSink, load_or_default};
//!
//! let slot = FileSlot::new("/path/to/data");
//! let outcome = load_or_default(&slot);
//! let mut editor = EditController::new(outcome.into_state(), SlotSink::new(slot));
//! editor.add_row();
//! ```
//!
//! # Architecture
//!
//! - `slot/` - Durable key-value slots (memory, file)
//! - `io/` - Snapshot load and save
//! - `sink.rs` - Edit controller snapshot hook backed by a slot
//! - `error.rs` - Error types with user-friendly messages

mod error;
mod io;
mod sink;
mod slot;

pub use error::{PersistenceError, Result};
pub use io::{LoadOutcome, LoadSource, load, load_or_default, save, serialize_state, try_load};
pub use sink::SlotSink;
pub use slot::{DurableSlot, FileSlot, MemorySlot, STORAGE_KEY};
