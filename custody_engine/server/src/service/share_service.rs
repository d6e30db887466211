use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use custody_ledger::{CustodianId, CustodyService, ShareRecord, Submission, TrustModel};
use serde::{Deserialize, Serialize};

use crate::service::error::ApiError;

/// Body for the server-hash trust model. A stray `share_hash` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialShareRequest {
    pub custodian_id: String,
    pub password: String,
    pub share_data: String,
}

/// Body for the client-hash trust model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashedShareRequest {
    pub custodian_id: String,
    pub share_data: String,
    pub share_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitShareResponse {
    pub message: String,
    /// Present for server-hash submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_hash: Option<String>,
    /// Present for client-hash submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_shares: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSharesResponse {
    pub shares: Vec<ShareRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListSharesQuery {
    pub custodian_id: Option<String>,
}

/// Submit a share. The expected body depends on the service's trust model.
pub async fn submit_share(
    State(service): State<Arc<CustodyService>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SubmitShareResponse>, ApiError> {
    let trust_model = service.trust_model();
    let submission = match trust_model {
        TrustModel::ServerHash => {
            let req: CredentialShareRequest = serde_json::from_value(body)
                .map_err(|e| ApiError::unprocessable(format!("Invalid {trust_model} body: {e}")))?;
            Submission::WithCredential {
                custodian_id: CustodianId(req.custodian_id),
                password: req.password,
                share_data: req.share_data,
            }
        }
        TrustModel::ClientHash => {
            let req: HashedShareRequest = serde_json::from_value(body)
                .map_err(|e| ApiError::unprocessable(format!("Invalid {trust_model} body: {e}")))?;
            Submission::WithHash {
                custodian_id: CustodianId(req.custodian_id),
                share_data: req.share_data,
                share_hash: req.share_hash,
            }
        }
    };

    let receipt = service.submit(submission)?;

    let response = match trust_model {
        TrustModel::ServerHash => SubmitShareResponse {
            message: "Share received and stored".into(),
            share_hash: Some(receipt.share_hash),
            total_shares: None,
        },
        TrustModel::ClientHash => SubmitShareResponse {
            message: format!("Share received from {}", receipt.custodian_id),
            share_hash: None,
            total_shares: Some(receipt.total_shares),
        },
    };
    Ok(Json(response))
}

/// All stored shares in insertion order, optionally for one custodian.
pub async fn get_shares(
    State(service): State<Arc<CustodyService>>,
    Query(query): Query<ListSharesQuery>,
) -> Json<ListSharesResponse> {
    let shares = match query.custodian_id {
        Some(id) => service.shares_for(&CustodianId(id)),
        None => service.list_shares(),
    };
    Json(ListSharesResponse { shares })
}
