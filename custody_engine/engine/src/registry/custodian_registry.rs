//! This module will:
//!     Track one credential per custodian identifier
//!     Refuse a second registration for the same identifier
//!     Check presented credentials through a pluggable verifier

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::CustodyError;
use crate::registry::credentials::{CredentialVerifier, PlaintextVerifier};
use crate::types::{CustodianId, Credential};

/// Central custodian registry (thread-safe)
pub struct CustodianRegistry {
    custodians: RwLock<HashMap<CustodianId, Credential>>,
    verifier: Box<dyn CredentialVerifier>,
}

impl Default for CustodianRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CustodianRegistry {
    /// Create a new empty registry using exact-match credential checks
    pub fn new() -> Self {
        Self::with_verifier(PlaintextVerifier)
    }

    pub fn with_verifier(verifier: impl CredentialVerifier + 'static) -> Self {
        CustodianRegistry {
            custodians: RwLock::new(HashMap::new()),
            verifier: Box::new(verifier),
        }
    }

    /// Register a custodian. Check and insert happen under one write lock, so of
    /// two racing registrations for the same id exactly one wins.
    pub fn register(&self, id: CustodianId, credential: Credential) -> Result<(), CustodyError> {
        let mut custodians = self
            .custodians
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if custodians.contains_key(&id) {
            return Err(CustodyError::AlreadyRegistered(id.0));
        }

        custodians.insert(id, credential);
        Ok(())
    }

    /// Check a presented credential against the stored one.
    pub fn authenticate(&self, id: &CustodianId, presented: &str) -> Result<(), CustodyError> {
        let custodians = self
            .custodians
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let stored = custodians
            .get(id)
            .ok_or_else(|| CustodyError::NotFound(id.0.clone()))?;

        if !self.verifier.verify(stored, presented) {
            return Err(CustodyError::InvalidCredential(id.0.clone()));
        }
        Ok(())
    }

    /// Existence check only, no credential involved.
    pub fn contains(&self, id: &CustodianId) -> bool {
        self.custodians
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.custodians
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<CustodianId> {
        let mut ids: Vec<CustodianId> = self
            .custodians
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }
}
