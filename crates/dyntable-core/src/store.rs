//! Ordered row storage with collision-free id allocation.

use dyntable_model::{Row, RowId, RowUpdate};

/// Ordered collection of rows.
///
/// Ids come from a monotonic counter seeded past the largest id already in
/// the store. The counter is never rewound, so ids stay unique for the whole
/// session even across [`RowStore::delete_all_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStore {
    rows: Vec<Row>,
    next_id: RowId,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RowStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: RowId::new(1),
        }
    }

    /// Take ownership of existing rows, e.g. from a loaded snapshot.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let next_id = rows
            .iter()
            .map(|row| row.id)
            .max()
            .map_or(RowId::new(1), RowId::next);
        Self { rows, next_id }
    }

    /// Never hand out an id below `floor`.
    ///
    /// Hosts that reopen the same snapshot use this to keep ids unique across
    /// sessions, since rows deleted earlier leave no trace in the snapshot.
    pub fn raise_id_floor(&mut self, floor: RowId) {
        if floor > self.next_id {
            self.next_id = floor;
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.iter().map(|row| row.id)
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    /// Append a blank row with a fresh id.
    pub fn add_row(&mut self) -> &Row {
        let id = self.allocate_id();
        self.rows.push(Row::blank(id));
        tracing::debug!(row = %id, "added row");
        &self.rows[self.rows.len() - 1]
    }

    /// Remove the row with `id`. Returns whether a row was removed.
    pub fn delete_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        tracing::debug!(row = %id, removed, "delete row");
        removed
    }

    /// Remove every row. Returns how many were removed.
    pub fn delete_all_rows(&mut self) -> usize {
        let removed = self.rows.len();
        self.rows.clear();
        tracing::debug!(removed, "deleted all rows");
        removed
    }

    /// Apply a partial update to the row with `id`.
    ///
    /// Returns `false` without touching anything when the id is unknown.
    pub fn update_row(&mut self, id: RowId, update: RowUpdate) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.apply(update);
                tracing::debug!(row = %id, "updated row");
                true
            }
            None => false,
        }
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    fn allocate_id(&mut self) -> RowId {
        let mut candidate = self.next_id;
        // Only reachable after the counter saturates; wrap and probe for a gap.
        while self.contains(candidate) {
            candidate = if candidate.get() == u64::MAX {
                RowId::new(1)
            } else {
                candidate.next()
            };
        }
        self.next_id = candidate.next();
        candidate
    }
}
