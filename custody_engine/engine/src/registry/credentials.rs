use crate::types::Credential;

/// Pluggable credential check used by [`super::CustodianRegistry::authenticate`].
///
/// Swapping the implementation (salted hashing, constant-time compare) does not
/// change the registry or pipeline contract.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, stored: &Credential, presented: &str) -> bool;
}

/// Exact string equality against the stored plaintext.
///
/// Not timing safe. Kept so registry behavior stays reproducible in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, stored: &Credential, presented: &str) -> bool {
        stored.expose() == presented
    }
}
