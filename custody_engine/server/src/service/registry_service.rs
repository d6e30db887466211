use std::sync::Arc;

use axum::{Json, extract::State};
use custody_ledger::CustodyService;
use serde::{Deserialize, Serialize};

use crate::service::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustodianRequest {
    pub custodian_id: String,
    #[serde(alias = "credential")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Register a custodian; a second registration for the same id is a 409.
pub async fn register_custodian(
    State(service): State<Arc<CustodyService>>,
    Json(request): Json<RegisterCustodianRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = service.register_custodian(request.custodian_id, request.password)?;
    Ok(Json(MessageResponse { message }))
}
