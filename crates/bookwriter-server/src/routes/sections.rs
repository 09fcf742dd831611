//! Section routes.
//!
//! - GET  /api/sections/        - List all sections (any authenticated user)
//! - POST /api/sections/        - Create a section (author role required)
//! - GET/PUT/PATCH/DELETE /api/sections/{id}/ - Detail operations
//!   (author or collaborator role required)
//!
//! Sections nest through `parent_section_id`; a parent must belong to the
//! same book as its child. Unknown book or parent ids answer 404.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use bookwriter_core::{BookId, SectionId, validate_title};
use bookwriter_store::{NewSection, SectionChanges, SectionRow};

use crate::auth::{self, CurrentUser};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Wire representation of a section.
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub id: SectionId,
    pub title: String,
    pub book_id: BookId,
    pub parent_section_id: Option<SectionId>,
    pub created: DateTime<Utc>,
}

impl From<SectionRow> for SectionResponse {
    fn from(row: SectionRow) -> Self {
        Self {
            id: SectionId::from_uuid(row.id),
            title: row.title,
            book_id: BookId::from_uuid(row.book_id),
            parent_section_id: row.parent_section_id.map(SectionId::from_uuid),
            created: row.created,
        }
    }
}

/// Body for POST and PUT. `book` is also accepted as `book_id`.
#[derive(Debug, Deserialize)]
pub struct SectionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(alias = "book_id")]
    pub book: Option<BookId>,
    #[serde(default)]
    pub parent_section_id: Option<SectionId>,
}

/// Body for PATCH. `parent_section_id: null` clears the parent; leaving the
/// field out keeps it.
#[derive(Debug, Deserialize)]
pub struct PatchSectionRequest {
    pub title: Option<String>,
    #[serde(alias = "book_id")]
    pub book: Option<BookId>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_section_id: Option<Option<SectionId>>,
}

/// Deserialize a present-but-possibly-null field into `Some(Option<T>)`,
/// leaving absent fields as `None` via `#[serde(default)]`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/sections/ - List all sections.
async fn list_sections(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<SectionResponse>>> {
    let rows = state.store().list_sections().await?;
    Ok(Json(rows.into_iter().map(SectionResponse::from).collect()))
}

/// POST /api/sections/ - Create a section. Author role required.
async fn create_section(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<SectionRequest>,
) -> ApiResult<(StatusCode, Json<SectionResponse>)> {
    auth::require_author(&state, &user).await?;

    validate_title(&request.title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let book = request
        .book
        .ok_or_else(|| ApiError::BadRequest("book: is required".to_string()))?;

    let new_section = NewSection::new(
        request.title,
        book.0,
        request.parent_section_id.map(|id| id.0),
    );
    let row = state.store().insert_section(&new_section).await?;

    tracing::info!(
        section_id = %row.id,
        book_id = %row.book_id,
        user_id = %user.user_id,
        "Section created"
    );

    Ok((StatusCode::CREATED, Json(SectionResponse::from(row))))
}

/// GET /api/sections/{id}/ - Retrieve a section.
async fn get_section(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SectionResponse>> {
    auth::require_author_or_collaborator(&state, &user).await?;

    let row = state.store().get_section(id).await?;
    Ok(Json(SectionResponse::from(row)))
}

/// PUT /api/sections/{id}/ - Full update.
async fn update_section(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<SectionRequest>,
) -> ApiResult<Json<SectionResponse>> {
    auth::require_author_or_collaborator(&state, &user).await?;

    validate_title(&request.title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let book = request
        .book
        .ok_or_else(|| ApiError::BadRequest("book: is required".to_string()))?;

    let changes = SectionChanges {
        title: Some(request.title),
        book_id: Some(book.0),
        // PUT is the full representation: an absent parent clears it
        parent_section_id: Some(request.parent_section_id.map(|id| id.0)),
    };
    let row = state.store().update_section(id, &changes).await?;

    Ok(Json(SectionResponse::from(row)))
}

/// PATCH /api/sections/{id}/ - Partial update.
async fn patch_section(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<PatchSectionRequest>,
) -> ApiResult<Json<SectionResponse>> {
    auth::require_author_or_collaborator(&state, &user).await?;

    if let Some(ref title) = request.title {
        validate_title(title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }

    let changes = SectionChanges {
        title: request.title,
        book_id: request.book.map(|id| id.0),
        parent_section_id: request
            .parent_section_id
            .map(|parent| parent.map(|id| id.0)),
    };
    let row = state.store().update_section(id, &changes).await?;

    Ok(Json(SectionResponse::from(row)))
}

/// DELETE /api/sections/{id}/ - Delete a section. Children cascade.
async fn delete_section(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    auth::require_author_or_collaborator(&state, &user).await?;

    state.store().delete_section(id).await?;

    tracing::info!(section_id = %id, user_id = %user.user_id, "Section deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build section routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/sections/", get(list_sections).post(create_section))
        .route(
            "/api/sections/{id}/",
            get(get_section)
                .put(update_section)
                .patch(patch_section)
                .delete(delete_section),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_request_deserialize() {
        let json = format!(
            r#"{{"title": "Chapter 1", "book": "{}"}}"#,
            Uuid::nil()
        );
        let request: SectionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.title, "Chapter 1");
        assert!(request.book.is_some());
        assert!(request.parent_section_id.is_none());
    }

    #[test]
    fn test_section_request_accepts_book_id_alias() {
        let json = format!(r#"{{"title": "Ch", "book_id": "{}"}}"#, Uuid::nil());
        let request: SectionRequest = serde_json::from_str(&json).unwrap();
        assert!(request.book.is_some());
    }

    #[test]
    fn test_section_request_with_parent() {
        let json = format!(
            r#"{{"title": "1.1", "book": "{}", "parent_section_id": "{}"}}"#,
            Uuid::nil(),
            Uuid::new_v4()
        );
        let request: SectionRequest = serde_json::from_str(&json).unwrap();
        assert!(request.parent_section_id.is_some());
    }

    #[test]
    fn test_patch_request_distinguishes_null_from_absent() {
        // Absent: keep the stored parent
        let request: PatchSectionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.parent_section_id.is_none());

        // Null: clear the parent
        let request: PatchSectionRequest =
            serde_json::from_str(r#"{"parent_section_id": null}"#).unwrap();
        assert_eq!(request.parent_section_id, Some(None));

        // Present: move under the given parent
        let json = format!(r#"{{"parent_section_id": "{}"}}"#, Uuid::nil());
        let request: PatchSectionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(
            request.parent_section_id,
            Some(Some(SectionId::from_uuid(Uuid::nil())))
        );
    }

    #[test]
    fn test_section_response_serialize() {
        let row = SectionRow {
            id: Uuid::nil(),
            title: "Chapter 1".to_string(),
            book_id: Uuid::nil(),
            parent_section_id: None,
            created: Utc::now(),
        };
        let json = serde_json::to_string(&SectionResponse::from(row)).unwrap();
        assert!(json.contains("\"title\":\"Chapter 1\""));
        assert!(json.contains("\"parent_section_id\":null"));
    }
}
