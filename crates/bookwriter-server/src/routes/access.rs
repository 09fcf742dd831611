//! Access management routes: grant and revoke a collaboration's edit flag.
//!
//! - PUT /api/grant-access/  - Set can_edit = true  (author role required)
//! - PUT /api/revoke-access/ - Set can_edit = false (author role required)
//!
//! Both take `{"collaborator_id": <id>}` where the value is a Collaboration
//! record id; the field name is kept for wire compatibility even though it
//! does not denote a user id. These endpoints answer with the historical
//! `{"message": ...}` bodies, including `404 {"message": "Collaboration not
//! found"}`.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::put,
};
use serde::{Deserialize, Serialize};

use bookwriter_core::CollaborationId;
use bookwriter_store::StoreError;

use crate::auth::{self, CurrentUser};
use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for grant/revoke.
#[derive(Debug, Deserialize)]
pub struct AccessRequest {
    /// The Collaboration record id to change.
    pub collaborator_id: Option<CollaborationId>,
}

/// Confirmation body for grant/revoke, also used for the 404 case.
#[derive(Debug, Serialize)]
pub struct AccessMessage {
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// PUT /api/grant-access/ - Grant edit access on a collaboration.
async fn grant_access(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<AccessRequest>,
) -> Result<Json<AccessMessage>, Response> {
    set_can_edit(&state, &user, request, true, "Access granted successfully").await
}

/// PUT /api/revoke-access/ - Revoke edit access on a collaboration.
async fn revoke_access(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<AccessRequest>,
) -> Result<Json<AccessMessage>, Response> {
    set_can_edit(&state, &user, request, false, "Access revoked successfully").await
}

/// Shared grant/revoke flow: author check, lookup, flag update.
async fn set_can_edit(
    state: &AppState,
    user: &CurrentUser,
    request: AccessRequest,
    can_edit: bool,
    confirmation: &str,
) -> Result<Json<AccessMessage>, Response> {
    auth::require_author(state, user)
        .await
        .map_err(IntoResponse::into_response)?;

    let Some(collaboration_id) = request.collaborator_id else {
        return Err(
            ApiError::BadRequest("collaborator_id: is required".to_string()).into_response(),
        );
    };

    match state.store().set_can_edit(collaboration_id.0, can_edit).await {
        Ok(row) => {
            tracing::info!(
                collaboration_id = %row.id,
                book_id = %row.book_id,
                can_edit,
                granted_by = %user.user_id,
                "Collaboration access changed"
            );
            Ok(Json(AccessMessage {
                message: confirmation.to_string(),
            }))
        }
        Err(StoreError::CollaborationNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(AccessMessage {
                message: "Collaboration not found".to_string(),
            }),
        )
            .into_response()),
        Err(e) => Err(ApiError::Store(e).into_response()),
    }
}

/// Build access management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/grant-access/", put(grant_access))
        .route("/api/revoke-access/", put(revoke_access))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_access_request_deserialize() {
        let json = format!(r#"{{"collaborator_id": "{}"}}"#, Uuid::nil());
        let request: AccessRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(
            request.collaborator_id,
            Some(CollaborationId::from_uuid(Uuid::nil()))
        );
    }

    #[test]
    fn test_access_request_missing_id() {
        let request: AccessRequest = serde_json::from_str("{}").unwrap();
        assert!(request.collaborator_id.is_none());
    }

    #[test]
    fn test_access_message_serialize() {
        let message = AccessMessage {
            message: "Access granted successfully".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"message":"Access granted successfully"}"#
        );
    }

    #[test]
    fn test_not_found_message_shape() {
        let message = AccessMessage {
            message: "Collaboration not found".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"message":"Collaboration not found"}"#
        );
    }
}
