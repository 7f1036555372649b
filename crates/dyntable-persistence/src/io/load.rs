//! Snapshot loading.

use dyntable_model::TableState;

use crate::error::{PersistenceError, Result};
use crate::slot::{DurableSlot, STORAGE_KEY};

/// Where a loaded state came from.
#[derive(Debug)]
pub enum LoadSource {
    /// Parsed from the slot.
    Stored,
    /// Nothing was stored; defaults were used.
    Missing,
    /// The stored content was unusable and was replaced by defaults.
    Recovered(PersistenceError),
}

/// Result of [`load`]: always a usable state.
#[derive(Debug)]
pub struct LoadOutcome {
    pub state: TableState,
    pub source: LoadSource,
}

impl LoadOutcome {
    /// The error that forced a fallback to defaults, if any.
    pub fn recovered_error(&self) -> Option<&PersistenceError> {
        match &self.source {
            LoadSource::Recovered(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_state(self) -> TableState {
        self.state
    }
}

/// Read and parse the state under `key`.
///
/// Returns `Ok(None)` when nothing is stored. Content that is not valid JSON
/// for a table, or that repeats a row id or column-2 option, is
/// [`PersistenceError::MalformedPersistedState`].
pub fn try_load<S: DurableSlot + ?Sized>(slot: &S, key: &str) -> Result<Option<TableState>> {
    let Some(content) = slot.read(key)? else {
        return Ok(None);
    };
    parse_state(&content, key).map(Some)
}

/// Load the state under `key`, falling back to `fallback()` when the slot is
/// empty, unreadable or holds malformed content.
pub fn load<S, F>(slot: &S, key: &str, fallback: F) -> LoadOutcome
where
    S: DurableSlot + ?Sized,
    F: FnOnce() -> TableState,
{
    match try_load(slot, key) {
        Ok(Some(state)) => {
            tracing::info!(rows = state.rows.len(), key, "Loaded table state");
            LoadOutcome {
                state,
                source: LoadSource::Stored,
            }
        }
        Ok(None) => {
            tracing::info!(key, "No stored table state, using defaults");
            LoadOutcome {
                state: fallback(),
                source: LoadSource::Missing,
            }
        }
        Err(error) => {
            tracing::warn!(key, %error, "Discarding stored table state, using defaults");
            LoadOutcome {
                state: fallback(),
                source: LoadSource::Recovered(error),
            }
        }
    }
}

/// [`load`] under [`STORAGE_KEY`] with the built-in default state.
pub fn load_or_default<S: DurableSlot + ?Sized>(slot: &S) -> LoadOutcome {
    load(slot, STORAGE_KEY, TableState::default)
}

fn parse_state(content: &str, key: &str) -> Result<TableState> {
    let state: TableState =
        serde_json::from_str(content).map_err(|e| PersistenceError::MalformedPersistedState {
            key: key.to_string(),
            source: Box::new(e),
        })?;

    state
        .validate()
        .map_err(|e| PersistenceError::MalformedPersistedState {
            key: key.to_string(),
            source: Box::new(e),
        })?;

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;

    #[test]
    fn test_missing_slot_uses_fallback() {
        let slot = MemorySlot::new();
        let outcome = load_or_default(&slot);
        assert!(matches!(outcome.source, LoadSource::Missing));
        assert_eq!(outcome.state, TableState::default());
    }

    #[test]
    fn test_garbage_is_recovered() {
        let slot = MemorySlot::with_value(STORAGE_KEY, "{not json");
        let outcome = load_or_default(&slot);
        assert!(matches!(
            outcome.recovered_error(),
            Some(PersistenceError::MalformedPersistedState { .. })
        ));
        assert_eq!(outcome.into_state(), TableState::default());
    }

    #[test]
    fn test_duplicate_row_ids_are_malformed() {
        let slot = MemorySlot::with_value(
            STORAGE_KEY,
            r#"{"rows":[{"id":1,"label1":null,"label2":[]},{"id":1,"label1":null,"label2":[]}],"column1Options":["A"],"column2Options":["X"]}"#,
        );
        assert!(matches!(
            try_load(&slot, STORAGE_KEY),
            Err(PersistenceError::MalformedPersistedState { .. })
        ));
    }

    #[test]
    fn test_custom_fallback() {
        let slot = MemorySlot::new();
        let outcome = load(&slot, "other", || {
            TableState::with_options(["A"].into_iter().collect(), ["X"].into_iter().collect())
        });
        assert_eq!(outcome.state.column1_options.as_slice(), ["A"]);
    }
}
