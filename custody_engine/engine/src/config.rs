//! Service configuration

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CustodyError;
use crate::types::TrustModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Which side produces the share hash on submission
    #[serde(default)]
    pub trust_model: TrustModel,

    /// Stamp accepted records with server UTC time (applies to both trust models)
    #[serde(default = "default_true")]
    pub record_timestamps: bool,

    /// Audit entries kept in memory before the oldest is evicted
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            trust_model: TrustModel::default(),
            record_timestamps: true,
            audit_capacity: default_audit_capacity(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory for the daily rolling log file
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,

    /// JSON lines in the log file instead of logfmt
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            json: false,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_true() -> bool {
    true
}

fn default_audit_capacity() -> usize {
    500
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl ServiceConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CustodyError> {
        toml::from_str(content).map_err(|e| CustodyError::Config(e.to_string()))
    }

    /// Load from a TOML file, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, CustodyError> {
        if !path.exists() {
            tracing::info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
