//! Record and update payloads

use crate::lax::LaxInt;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// A single stored entity
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde_as(as = "LaxInt")]
    pub id: i64,
    pub name: String,
    #[serde_as(as = "LaxInt")]
    pub value: i64,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, value: i64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }

    /// Overwrite the fields present in `update`, leaving the rest untouched.
    ///
    /// The id is never part of an update, so it stays fixed for the
    /// lifetime of the record.
    pub fn apply(&mut self, update: &RecordUpdate) {
        if let Some(ref name) = update.name {
            self.name = name.clone();
        }
        if let Some(value) = update.value {
            self.value = value;
        }
    }
}

/// Field changes for an existing record.
///
/// Missing and `null` fields both deserialize to `None`. Unknown fields
/// (including `id`) are ignored.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "Option<LaxInt>")]
    pub value: Option<i64>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.value.is_none()
    }
}

/// Records present when the process starts
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(1, "Record One", 100),
        Record::new(2, "Record Two", 200),
        Record::new(3, "Record Three", 300),
    ]
}
