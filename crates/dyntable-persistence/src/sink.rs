//! Bridges the edit controller's snapshot hook to a durable slot.

use dyntable_core::SnapshotSink;
use dyntable_model::TableState;

use crate::error::PersistenceError;
use crate::io::save;
use crate::slot::{DurableSlot, STORAGE_KEY};

/// Writes every controller snapshot to a slot under a fixed key.
#[derive(Debug)]
pub struct SlotSink<S> {
    slot: S,
    key: String,
}

impl<S: DurableSlot> SlotSink<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, STORAGE_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_slot(self) -> S {
        self.slot
    }
}

impl<S: DurableSlot> SnapshotSink for SlotSink<S> {
    type Error = PersistenceError;

    fn persist(&mut self, state: &TableState) -> Result<(), Self::Error> {
        save(&mut self.slot, &self.key, state)
    }
}
