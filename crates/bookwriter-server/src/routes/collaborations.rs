//! Collaboration routes.
//!
//! - GET  /api/collaborations/        - List all collaborations
//! - POST /api/collaborations/        - Create a collaboration
//! - GET/PUT/PATCH/DELETE /api/collaborations/{id}/ - Detail operations
//!
//! A collaboration joins a user to a book with a role string and a
//! `can_edit` flag. Create always records the requester as the user —
//! self-enrollment only, never naming someone else. Duplicate (user, book)
//! pairs are allowed.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookwriter_core::{BookId, CollaborationId, UserId};
use bookwriter_store::{CollaborationChanges, CollaborationRow, NewCollaboration};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Role string recorded when the client does not supply one.
const DEFAULT_COLLABORATION_ROLE: &str = "collaborator";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Wire representation of a collaboration.
#[derive(Debug, Serialize)]
pub struct CollaborationResponse {
    pub id: CollaborationId,
    pub user_id: UserId,
    pub book_id: BookId,
    pub role: String,
    pub can_edit: bool,
    pub created: DateTime<Utc>,
}

impl From<CollaborationRow> for CollaborationResponse {
    fn from(row: CollaborationRow) -> Self {
        Self {
            id: CollaborationId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            book_id: BookId::from_uuid(row.book_id),
            role: row.role,
            can_edit: row.can_edit,
            created: row.created,
        }
    }
}

/// Body for POST. `book` is also accepted as `book_id`; any client-supplied
/// user field is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateCollaborationRequest {
    #[serde(alias = "book_id")]
    pub book: Option<BookId>,
    pub role: Option<String>,
    pub can_edit: Option<bool>,
}

/// Body for PUT and PATCH. The user/book pairing is fixed at creation.
#[derive(Debug, Deserialize)]
pub struct UpdateCollaborationRequest {
    pub role: Option<String>,
    pub can_edit: Option<bool>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/collaborations/ - List all collaborations.
async fn list_collaborations(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<CollaborationResponse>>> {
    let rows = state.store().list_collaborations().await?;
    Ok(Json(
        rows.into_iter().map(CollaborationResponse::from).collect(),
    ))
}

/// POST /api/collaborations/ - Create a collaboration.
///
/// The collaboration's user is always the requester, regardless of anything
/// in the body.
async fn create_collaboration(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateCollaborationRequest>,
) -> ApiResult<(StatusCode, Json<CollaborationResponse>)> {
    let book = request
        .book
        .ok_or_else(|| ApiError::BadRequest("book: is required".to_string()))?;

    let role = request
        .role
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_COLLABORATION_ROLE.to_string());

    let new_collaboration = NewCollaboration::new(
        user.user_id.0,
        book.0,
        role,
        request.can_edit.unwrap_or(false),
    );
    let row = state
        .store()
        .insert_collaboration(&new_collaboration)
        .await?;

    tracing::info!(
        collaboration_id = %row.id,
        book_id = %row.book_id,
        user_id = %user.user_id,
        "Collaboration created"
    );

    Ok((StatusCode::CREATED, Json(CollaborationResponse::from(row))))
}

/// GET /api/collaborations/{id}/ - Retrieve a collaboration.
async fn get_collaboration(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CollaborationResponse>> {
    let row = state.store().get_collaboration(id).await?;
    Ok(Json(CollaborationResponse::from(row)))
}

/// PUT /api/collaborations/{id}/ - Full update of the mutable fields.
async fn update_collaboration(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCollaborationRequest>,
) -> ApiResult<Json<CollaborationResponse>> {
    let changes = CollaborationChanges {
        role: request.role,
        can_edit: request.can_edit,
    };
    let row = state.store().update_collaboration(id, &changes).await?;

    Ok(Json(CollaborationResponse::from(row)))
}

/// DELETE /api/collaborations/{id}/ - Delete a collaboration.
async fn delete_collaboration(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store().delete_collaboration(id).await?;

    tracing::info!(collaboration_id = %id, user_id = %user.user_id, "Collaboration deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build collaboration routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/collaborations/",
            get(list_collaborations).post(create_collaboration),
        )
        .route(
            "/api/collaborations/{id}/",
            get(get_collaboration)
                .put(update_collaboration)
                .patch(update_collaboration)
                .delete(delete_collaboration),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = format!(r#"{{"book": "{}"}}"#, Uuid::nil());
        let request: CreateCollaborationRequest = serde_json::from_str(&json).unwrap();
        assert!(request.book.is_some());
        assert!(request.role.is_none());
        assert!(request.can_edit.is_none());
    }

    #[test]
    fn test_create_request_ignores_client_user() {
        // A client-supplied user field is dropped, not an error.
        let json = format!(
            r#"{{"book": "{}", "user_id": "{}"}}"#,
            Uuid::nil(),
            Uuid::new_v4()
        );
        let request: CreateCollaborationRequest = serde_json::from_str(&json).unwrap();
        assert!(request.book.is_some());
    }

    #[test]
    fn test_create_request_with_flags() {
        let json = format!(
            r#"{{"book_id": "{}", "role": "editor", "can_edit": true}}"#,
            Uuid::nil()
        );
        let request: CreateCollaborationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.role.as_deref(), Some("editor"));
        assert_eq!(request.can_edit, Some(true));
    }

    #[test]
    fn test_update_request_deserialize() {
        let request: UpdateCollaborationRequest =
            serde_json::from_str(r#"{"can_edit": false}"#).unwrap();
        assert!(request.role.is_none());
        assert_eq!(request.can_edit, Some(false));
    }

    #[test]
    fn test_collaboration_response_serialize() {
        let row = CollaborationRow {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            book_id: Uuid::nil(),
            role: "collaborator".to_string(),
            can_edit: false,
            created: Utc::now(),
        };
        let json = serde_json::to_string(&CollaborationResponse::from(row)).unwrap();
        assert!(json.contains("\"can_edit\":false"));
        assert!(json.contains("\"role\":\"collaborator\""));
    }
}
