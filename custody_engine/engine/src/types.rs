//! Shared data types for the custody ledger: custodian IDs, credentials, share records.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use zeroize::Zeroizing;

/// Unique identifier for a custodian, assigned at registration and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustodianId(pub String);

impl CustodianId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustodianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustodianId {
    fn from(value: &str) -> Self {
        CustodianId(value.to_string())
    }
}

impl From<String> for CustodianId {
    fn from(value: String) -> Self {
        CustodianId(value)
    }
}

/// Stored custodian credential. Wiped from memory when dropped, never serialized.
#[derive(Clone)]
pub struct Credential(Zeroizing<String>);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(Zeroizing::new(secret.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Which party is trusted to produce the share hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustModel {
    /// Client sends raw share data plus its password; the server computes the hash.
    #[default]
    ServerHash,
    /// Client sends share data plus its own hash; the server recomputes and compares.
    /// Custodian existence is checked, credentials are not.
    ClientHash,
}

impl TrustModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustModel::ServerHash => "server-hash",
            TrustModel::ClientHash => "client-hash",
        }
    }
}

impl fmt::Display for TrustModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrustModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "server-hash" => Ok(TrustModel::ServerHash),
            "client-hash" => Ok(TrustModel::ClientHash),
            other => Err(format!(
                "unknown trust model '{other}' (expected server-hash | client-hash)"
            )),
        }
    }
}

/// A share accepted into the ledger. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub custodian_id: CustodianId,
    /// Opaque key fragment exactly as submitted.
    pub share_data: String,
    /// Lower-case hex SHA-256 of `share_data`.
    pub share_hash: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_utc_z"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub custodian_id: CustodianId,
    pub share_hash: String,
    /// Ledger size right after this record was appended.
    pub total_shares: usize,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_utc_z")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A share submission in one of the two trust models.
#[derive(Debug, Clone)]
pub enum Submission {
    WithCredential {
        custodian_id: CustodianId,
        password: String,
        share_data: String,
    },
    WithHash {
        custodian_id: CustodianId,
        share_data: String,
        share_hash: String,
    },
}

impl Submission {
    pub fn trust_model(&self) -> TrustModel {
        match self {
            Submission::WithCredential { .. } => TrustModel::ServerHash,
            Submission::WithHash { .. } => TrustModel::ClientHash,
        }
    }

    pub fn custodian_id(&self) -> &CustodianId {
        match self {
            Submission::WithCredential { custodian_id, .. }
            | Submission::WithHash { custodian_id, .. } => custodian_id,
        }
    }
}

/// ISO-8601 UTC with microseconds and an explicit `Z`, e.g. `2025-03-01T12:00:00.000123Z`.
pub fn format_utc(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn serialize_utc_z<S>(ts: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ts {
        Some(ts) => serializer.serialize_str(&format_utc(ts)),
        None => serializer.serialize_none(),
    }
}
