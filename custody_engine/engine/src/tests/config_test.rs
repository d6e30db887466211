use std::io::Write;

use crate::config::ServiceConfig;
use crate::error::CustodyError;
use crate::types::TrustModel;

#[test]
fn test_defaults() {
    let config = ServiceConfig::default();
    assert_eq!(config.bind_addr.port(), 8000);
    assert_eq!(config.trust_model, TrustModel::ServerHash);
    assert!(config.record_timestamps);
    assert_eq!(config.audit_capacity, 500);
    assert!(!config.log.json);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = ServiceConfig::from_toml_str(
        r#"
        trust_model = "client-hash"
        record_timestamps = false

        [log]
        json = true
        "#,
    )
    .unwrap();

    assert_eq!(config.trust_model, TrustModel::ClientHash);
    assert!(!config.record_timestamps);
    assert!(config.log.json);
    assert_eq!(config.audit_capacity, 500);
    assert_eq!(config.bind_addr.port(), 8000);
}

#[test]
fn test_unknown_trust_model_is_a_config_error() {
    let err = ServiceConfig::from_toml_str(r#"trust_model = "whatever""#).unwrap_err();
    assert!(matches!(err, CustodyError::Config(_)));
    assert!(!err.is_client_error());
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.trust_model, TrustModel::ServerHash);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "bind_addr = \"127.0.0.1:9100\"").unwrap();
    writeln!(file, "audit_capacity = 7").unwrap();

    let config = ServiceConfig::load(file.path()).unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9100");
    assert_eq!(config.audit_capacity, 7);
}

#[test]
fn test_trust_model_parses_from_str() {
    assert_eq!("server-hash".parse::<TrustModel>(), Ok(TrustModel::ServerHash));
    assert_eq!("client-hash".parse::<TrustModel>(), Ok(TrustModel::ClientHash));
    assert!("both".parse::<TrustModel>().is_err());
}
