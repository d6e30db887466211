//! Custody ledger HTTP service
//!
//! Exposes custodian registration, share submission and share listing over
//! JSON. The submission body follows the configured trust model.

pub mod server;
pub mod service;
