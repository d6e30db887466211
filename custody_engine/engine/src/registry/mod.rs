pub mod credentials;
pub mod custodian_registry;

pub use credentials::{CredentialVerifier, PlaintextVerifier};
pub use custodian_registry::CustodianRegistry;
