pub mod audit_service;
pub mod error;
pub mod health_service;
pub mod registry_service;
pub mod share_service;
