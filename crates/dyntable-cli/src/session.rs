//! Opening an editing session against the configured storage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use dyntable_core::{EditController, Label1Policy};
use dyntable_model::RowId;
use dyntable_persistence::{DurableSlot, FileSlot, LoadSource, SlotSink, load};

use crate::settings::Settings;

pub type Session<S> = EditController<SlotSink<S>>;

/// Load the table from `slot` and wrap it in an edit controller.
///
/// A discarded snapshot is reported through `tracing` and on stderr; the
/// session still starts from the default state.
///
/// Each command runs in its own session, so new row ids start no lower than
/// the current time in milliseconds. Rows deleted by an earlier session are
/// not in the snapshot, and their ids would otherwise come back.
pub fn open_session<S: DurableSlot>(
    slot: S,
    key: &str,
    settings: &Settings,
    policy: Label1Policy,
) -> Session<S> {
    let outcome = load(&slot, key, || settings.vocabulary.initial_state());
    if let LoadSource::Recovered(error) = &outcome.source {
        eprintln!("warning: {}", error.user_message());
    }
    EditController::new(outcome.into_state(), SlotSink::with_key(slot, key))
        .with_policy(policy)
        .with_id_floor(clock_id_floor())
}

fn clock_id_floor() -> RowId {
    RowId::new(u64::try_from(Utc::now().timestamp_millis()).unwrap_or(1))
}

/// Open a session on the directory-backed slot named by `settings`, with an
/// optional directory override.
pub fn open_file_session(
    settings: &Settings,
    data_dir: Option<PathBuf>,
    policy: Label1Policy,
) -> Result<Session<FileSlot>> {
    let dir = data_dir
        .or_else(|| settings.data_dir())
        .context("could not determine a data directory; pass --data-dir")?;
    tracing::debug!("Using data directory {:?}", dir);
    Ok(open_session(
        FileSlot::new(dir),
        &settings.storage.key,
        settings,
        policy,
    ))
}
