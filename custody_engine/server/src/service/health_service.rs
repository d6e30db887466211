use std::sync::Arc;

use axum::{Json, extract::State};
use custody_ledger::CustodyService;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub trust_model: String,
    pub custodians: usize,
    pub shares: usize,
}

/// Liveness plus the configured trust model and current registry and ledger sizes.
pub async fn check(State(service): State<Arc<CustodyService>>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "SERVING".into(),
        trust_model: service.trust_model().to_string(),
        custodians: service.registry().len(),
        shares: service.share_count(),
    })
}
