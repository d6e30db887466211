use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::types::CustodianId;

/// Type of custody event being tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    Registration,
    Submission,
    Rejection,
}

impl AuditEventType {
    pub fn label(&self) -> &'static str {
        match self {
            AuditEventType::Registration => "REGISTER",
            AuditEventType::Submission => "SUBMIT",
            AuditEventType::Rejection => "REJECT",
        }
    }
}

/// Record of a custody-related event
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub event_id: Uuid,
    pub event_type: AuditEventType,
    pub custodian_id: Option<CustodianId>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(
        event_type: AuditEventType,
        custodian_id: Option<CustodianId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type,
            custodian_id,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// In-memory audit tracker. Bounded: once full, the oldest entry is evicted.
pub struct AuditTracker {
    records: Mutex<VecDeque<AuditRecord>>,
    max_entries: usize,
}

impl AuditTracker {
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            records: Mutex::new(VecDeque::with_capacity(max_entries)),
            max_entries,
        }
    }

    /// Record a new event in the audit log
    pub fn log(&self, record: AuditRecord) {
        tracing::info!(
            target: "audit",
            event_id = %record.event_id,
            event = record.event_type.label(),
            custodian = record.custodian_id.as_ref().map(CustodianId::as_str).unwrap_or("-"),
            "{}",
            record.message
        );

        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        if records.len() == self.max_entries {
            records.pop_front(); // evict oldest
        }
        records.push_back(record);
    }

    /// Most recent events, newest first
    pub fn recent(&self, count: usize) -> Vec<AuditRecord> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.iter().rev().take(count).cloned().collect()
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

    pub fn capacity(&self) -> usize {
        self.max_entries
    }
}
