//! Snapshot load and save.
//!
//! This module handles:
//! - Loading the table state with silent fallback to defaults
//! - Saving full snapshots over the previous one

mod load;
mod save;

pub use load::{LoadOutcome, LoadSource, load, load_or_default, try_load};
pub use save::{save, serialize_state};
