//! Durable key-value slots.
//!
//! A slot stores one string value per key and overwrites it wholesale on
//! every write. Two implementations are provided:
//! - [`MemorySlot`] - in-process map, for tests and embedding
//! - [`FileSlot`] - one file per key in a directory, written atomically

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::Result;

/// Key under which the table state is stored.
pub const STORAGE_KEY: &str = "tableData";

/// Generic durable key-value storage.
pub trait DurableSlot {
    /// Read the value under `key`, `None` if nothing has been stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: DurableSlot + ?Sized> DurableSlot for &mut T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

impl<T: DurableSlot + ?Sized> DurableSlot for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
