//! Custody Ledger Core Library
//!
//! Custodians register once with a credential and submit key shares. Each
//! accepted share is recorded with its SHA-256 hash (and optionally a UTC
//! timestamp) in an append-only, process-lifetime ledger.

pub mod audit;
pub mod config;
pub mod crypto;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod types;

pub use config::{LogConfig, ServiceConfig};
pub use error::CustodyError;
pub use pipeline::{CustodyService, PipelineConfig};
pub use types::{
    CustodianId, Credential, ShareRecord, Submission, SubmissionReceipt, TrustModel,
};

#[cfg(test)]
mod tests;
