//! Snapshot saving.

use dyntable_model::TableState;

use crate::error::{PersistenceError, Result};
use crate::slot::DurableSlot;

/// Overwrite the slot under `key` with a complete snapshot of `state`.
pub fn save<S: DurableSlot + ?Sized>(slot: &mut S, key: &str, state: &TableState) -> Result<()> {
    let content = serialize_state(state)?;
    slot.write(key, &content)?;
    tracing::debug!(rows = state.rows.len(), key, "Saved table state");
    Ok(())
}

/// Serialize a state to its compact JSON wire form.
pub fn serialize_state(state: &TableState) -> Result<String> {
    serde_json::to_string(state).map_err(|e| PersistenceError::Serialization { source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{MemorySlot, STORAGE_KEY};

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let mut slot = MemorySlot::new();
        let mut state = TableState::default();
        save(&mut slot, STORAGE_KEY, &state).unwrap();

        state.rows.clear();
        save(&mut slot, STORAGE_KEY, &state).unwrap();

        assert_eq!(slot.writes(), 2);
        let stored = slot.get(STORAGE_KEY).unwrap();
        assert!(stored.starts_with(r#"{"rows":[],"#));
    }
}
