//! Row-state and constraint engine for the dynamic table editor.
//!
//! - [`RowStore`] keeps the ordered rows and hands out unique ids.
//! - [`OptionRegistry`] owns both option vocabularies and validates new
//!   column-2 options.
//! - [`constraint`] computes which column-1 values each row may take.
//! - [`EditController`] is the only writer and snapshots state after every
//!   mutation through a [`SnapshotSink`].

pub mod constraint;
pub mod controller;
pub mod error;
pub mod registry;
pub mod store;
pub mod view;

pub use constraint::{
    Label1Policy, available_column1_values, check_update, label1_conflicts, label1_holder,
    unknown_label2_values,
};
pub use controller::{EditController, SnapshotSink};
pub use error::{EditError, OptionError};
pub use registry::OptionRegistry;
pub use store::RowStore;
pub use view::{Feedback, RowView};
