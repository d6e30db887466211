//! Request validation: admits a share only after custodian existence, credential
//! and hash checks pass, in that order. Each check fails fast and a rejected
//! request never touches the registry or the ledger.

use crate::audit::{AuditEventType, AuditRecord, AuditTracker};
use crate::config::ServiceConfig;
use crate::crypto::{sha256_hex, verify_sha256_hex};
use crate::error::CustodyError;
use crate::ledger::ShareLedger;
use crate::registry::{CredentialVerifier, CustodianRegistry};
use crate::types::{
    CustodianId, Credential, ShareRecord, Submission, SubmissionReceipt, TrustModel,
};

/// Per-service validation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub trust_model: TrustModel,
    pub record_timestamps: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            trust_model: TrustModel::ServerHash,
            record_timestamps: true,
        }
    }
}

impl From<&ServiceConfig> for PipelineConfig {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            trust_model: config.trust_model,
            record_timestamps: config.record_timestamps,
        }
    }
}

/// Owns the registry, ledger and audit trail. Share it behind an `Arc`.
pub struct CustodyService {
    registry: CustodianRegistry,
    ledger: ShareLedger,
    audit: AuditTracker,
    config: PipelineConfig,
}

impl CustodyService {
    pub fn new(config: PipelineConfig, audit_capacity: usize) -> Self {
        Self::with_registry(config, CustodianRegistry::new(), audit_capacity)
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(PipelineConfig::from(config), config.audit_capacity)
    }

    /// Use a custom credential check in place of exact matching.
    pub fn with_verifier(
        config: PipelineConfig,
        verifier: impl CredentialVerifier + 'static,
        audit_capacity: usize,
    ) -> Self {
        Self::with_registry(config, CustodianRegistry::with_verifier(verifier), audit_capacity)
    }

    fn with_registry(
        config: PipelineConfig,
        registry: CustodianRegistry,
        audit_capacity: usize,
    ) -> Self {
        Self {
            registry,
            ledger: ShareLedger::new(),
            audit: AuditTracker::new(audit_capacity),
            config,
        }
    }

    pub fn trust_model(&self) -> TrustModel {
        self.config.trust_model
    }

    pub fn registry(&self) -> &CustodianRegistry {
        &self.registry
    }

    /// Register a custodian once. Returns a confirmation naming the custodian.
    pub fn register_custodian(
        &self,
        custodian_id: impl Into<CustodianId>,
        password: impl Into<String>,
    ) -> Result<String, CustodyError> {
        let id = custodian_id.into();
        match self.registry.register(id.clone(), Credential::new(password)) {
            Ok(()) => {
                let message = format!("Custodian '{id}' registered successfully");
                self.audit.log(AuditRecord::new(
                    AuditEventType::Registration,
                    Some(id),
                    message.clone(),
                ));
                Ok(message)
            }
            Err(e) => Err(self.reject(Some(id), e)),
        }
    }

    /// Route a submission through the configured trust model. A submission
    /// shaped for the other model is refused rather than reinterpreted.
    pub fn submit(&self, submission: Submission) -> Result<SubmissionReceipt, CustodyError> {
        if submission.trust_model() != self.config.trust_model {
            let id = submission.custodian_id().clone();
            return Err(self.reject(
                Some(id),
                CustodyError::InvalidInput(format!(
                    "submission uses the {} trust model but this service runs {}",
                    submission.trust_model(),
                    self.config.trust_model
                )),
            ));
        }

        match submission {
            Submission::WithCredential { custodian_id, password, share_data } => {
                self.submit_with_credential(custodian_id, &password, share_data)
            }
            Submission::WithHash { custodian_id, share_data, share_hash } => {
                self.submit_with_hash(custodian_id, share_data, &share_hash)
            }
        }
    }

    /// Server-hash submission: authenticate, then compute the hash.
    pub fn submit_with_credential(
        &self,
        custodian_id: impl Into<CustodianId>,
        password: &str,
        share_data: impl Into<String>,
    ) -> Result<SubmissionReceipt, CustodyError> {
        let id = custodian_id.into();
        let share_data = share_data.into();

        // STEP 1 + 2: custodian must exist and the password must match
        if let Err(e) = self.registry.authenticate(&id, password) {
            return Err(self.reject(Some(id), e));
        }

        // STEP 3: server computes the hash
        let share_hash = sha256_hex(&share_data);

        // STEP 4: append
        Ok(self.admit(id, share_data, share_hash))
    }

    /// Client-hash submission: existence check only, then verify the caller's hash.
    pub fn submit_with_hash(
        &self,
        custodian_id: impl Into<CustodianId>,
        share_data: impl Into<String>,
        share_hash: &str,
    ) -> Result<SubmissionReceipt, CustodyError> {
        let id = custodian_id.into();
        let share_data = share_data.into();

        // STEP 1: custodian must exist (no credential in this model)
        if !self.registry.contains(&id) {
            let e = CustodyError::NotFound(id.0.clone());
            return Err(self.reject(Some(id), e));
        }

        // STEP 2: recompute and compare
        let share_hash = match verify_sha256_hex(&share_data, share_hash) {
            Ok(hash) => hash,
            Err(e) => return Err(self.reject(Some(id), e)),
        };

        // STEP 3: append
        Ok(self.admit(id, share_data, share_hash))
    }

    /// All records in insertion order.
    pub fn list_shares(&self) -> Vec<ShareRecord> {
        self.ledger.list_all()
    }

    pub fn shares_for(&self, custodian_id: &CustodianId) -> Vec<ShareRecord> {
        self.ledger.records_for(custodian_id)
    }

    pub fn share_count(&self) -> usize {
        self.ledger.len()
    }

    /// Newest audit events first.
    pub fn recent_audit(&self, count: usize) -> Vec<AuditRecord> {
        self.audit.recent(count)
    }

    fn admit(&self, id: CustodianId, share_data: String, share_hash: String) -> SubmissionReceipt {
        let record = ShareRecord {
            custodian_id: id.clone(),
            share_data,
            share_hash: share_hash.clone(),
            timestamp: None,
        };
        let (total_shares, timestamp) = if self.config.record_timestamps {
            let (total, at) = self.ledger.append_stamped(record);
            (total, Some(at))
        } else {
            (self.ledger.append(record), None)
        };

        self.audit.log(AuditRecord::new(
            AuditEventType::Submission,
            Some(id.clone()),
            format!("Share {share_hash} accepted ({total_shares} stored)"),
        ));

        SubmissionReceipt {
            custodian_id: id,
            share_hash,
            total_shares,
            timestamp,
        }
    }

    fn reject(&self, id: Option<CustodianId>, error: CustodyError) -> CustodyError {
        self.audit.log(AuditRecord::new(
            AuditEventType::Rejection,
            id,
            format!("{}: {error}", error.kind()),
        ));
        error
    }
}
