//! Local key-value store for named collections
//!
//! The store is a flat map from collection names to serialized JSON text.
//! `FileStore` is the durable backend (one document per collection under
//! the data directory); `MemoryStore` substitutes for it in tests.
//! Repositories depend on the `Store` trait, never on a concrete backend.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// A string-keyed slot store
///
/// Implementations use interior mutability so shared references can write;
/// all operations are synchronous and run to completion.
pub trait Store {
    /// Read a slot; `None` when the key has never been written
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replace a slot's content entirely
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;

    /// Remove a slot; missing keys are a no-op
    fn remove(&self, key: &str) -> LedgerResult<()>;
}

/// An entity that persists in a named collection
pub trait Record: Serialize + DeserializeOwned {
    /// Name of the collection this entity persists in
    const COLLECTION: &'static str;

    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Fix up legacy fields after a read; default is a no-op
    fn normalize(&mut self) {}
}

/// Read a named collection, treating missing or unreadable content as empty
///
/// A slot that fails to parse is reported via the log and recovered from by
/// returning an empty collection; readers never see the parse failure.
pub fn read_collection<T, S>(store: &S, name: &str) -> LedgerResult<Vec<T>>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    let raw = match store.get(name)? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            let corrupt = LedgerError::corrupt(name, e.to_string());
            warn!("{}; treating it as empty", corrupt);
            Ok(Vec::new())
        }
    }
}

/// Write a named collection, fully replacing prior content
pub fn write_collection<T, S>(store: &S, name: &str, items: &[T]) -> LedgerResult<()>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let raw = serde_json::to_string_pretty(items)?;
    store.set(name, &raw)
}

/// Read an entity's collection, normalizing each record
pub fn read_records<R, S>(store: &S) -> LedgerResult<Vec<R>>
where
    R: Record,
    S: Store + ?Sized,
{
    let mut records: Vec<R> = read_collection(store, R::COLLECTION)?;
    for record in &mut records {
        record.normalize();
    }
    Ok(records)
}

/// Write an entity's collection
pub fn write_records<R, S>(store: &S, records: &[R]) -> LedgerResult<()>
where
    R: Record,
    S: Store + ?Sized,
{
    write_collection(store, R::COLLECTION, records)
}
