//! In-memory record store

use super::error::{Result, StoreError};
use records_types::{seed_records, Record, RecordUpdate};
use tokio::sync::RwLock;
use tracing::debug;

/// Ordered sequence of records, insertion order preserved.
///
/// Every operation holds the lock for its whole scan-then-mutate step.
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store holding the startup seed records
    pub fn seeded() -> Self {
        Self::with_records(seed_records())
    }

    /// All records in insertion order
    pub async fn list(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// First record with a matching id
    pub async fn get(&self, id: i64) -> Result<Record> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new record, rejecting ids that are already taken
    pub async fn create(&self, record: Record) -> Result<Record> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::Conflict(record.id));
        }
        records.push(record.clone());
        debug!("Record {} appended, store size {}", record.id, records.len());
        Ok(record)
    }

    /// Overwrite the fields present in `update`.
    ///
    /// Same semantics as [`RecordStore::update`]: absent fields are kept.
    pub async fn replace(&self, id: i64, update: &RecordUpdate) -> Result<Record> {
        self.apply_update(id, update).await
    }

    /// Overwrite the fields present in `update`
    pub async fn update(&self, id: i64, update: &RecordUpdate) -> Result<Record> {
        self.apply_update(id, update).await
    }

    /// Remove every record with a matching id, returning how many were removed.
    /// Removing a missing id is not an error.
    pub async fn delete(&self, id: i64) -> usize {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        before - records.len()
    }

    async fn apply_update(&self, id: i64, update: &RecordUpdate) -> Result<Record> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply(update);
        Ok(record.clone())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
