use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use custody_ledger::{CustodyService, audit::AuditRecord};
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditResponse {
    pub events: Vec<AuditRecord>,
}

/// Recent audit events, newest first.
pub async fn recent_events(
    State(service): State<Arc<CustodyService>>,
    Query(query): Query<AuditQuery>,
) -> Json<AuditResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    Json(AuditResponse {
        events: service.recent_audit(limit),
    })
}
