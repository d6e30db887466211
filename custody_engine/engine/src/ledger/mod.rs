//! Append-only, ordered storage of accepted share records.
//! Lives for the process lifetime only; nothing is persisted.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::types::{CustodianId, ShareRecord};

/// In-memory share ledger
#[derive(Default)]
pub struct ShareLedger {
    records: Mutex<Vec<ShareRecord>>,
}

impl ShareLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return the new total. Records get no identifier
    /// beyond their position; order is arrival order at the lock.
    pub fn append(&self, record: ShareRecord) -> usize {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(record);
        records.len()
    }

    /// Append with the server clock read inside the lock, so timestamps never
    /// run backwards along the ledger. Returns the new total and the stamp.
    pub fn append_stamped(&self, mut record: ShareRecord) -> (usize, DateTime<Utc>) {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        record.timestamp = Some(now);
        records.push(record);
        (records.len(), now)
    }

    /// Snapshot of every record in insertion order.
    pub fn list_all(&self) -> Vec<ShareRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of one custodian's records, in insertion order.
    pub fn records_for(&self, custodian_id: &CustodianId) -> Vec<ShareRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| &r.custodian_id == custodian_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
