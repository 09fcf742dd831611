//! Book routes.
//!
//! - GET  /api/books/        - List all books
//! - POST /api/books/        - Create a book (author is forced to the requester)
//! - GET/PUT/PATCH/DELETE /api/books/{id}/ - Detail operations
//!
//! Any authenticated user may operate on any book; detail operations
//! deliberately carry no ownership check.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookwriter_core::{BookId, UserId, validate_title};
use bookwriter_store::{BookChanges, BookRow, NewBook};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Wire representation of a book.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub author_id: UserId,
    pub created: DateTime<Utc>,
}

impl From<BookRow> for BookResponse {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::from_uuid(row.id),
            title: row.title,
            author_id: UserId::from_uuid(row.author_id),
            created: row.created,
        }
    }
}

/// Body for POST and PUT. Any client-supplied author field is ignored.
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub title: String,
}

/// Body for PATCH.
#[derive(Debug, Deserialize)]
pub struct PatchBookRequest {
    pub title: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/books/ - List all books.
async fn list_books(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<BookResponse>>> {
    let rows = state.store().list_books().await?;
    Ok(Json(rows.into_iter().map(BookResponse::from).collect()))
}

/// POST /api/books/ - Create a book.
///
/// The author is always the requester, regardless of anything in the body.
async fn create_book(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<BookRequest>,
) -> ApiResult<(StatusCode, Json<BookResponse>)> {
    validate_title(&request.title).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let new_book = NewBook::new(request.title, user.user_id.0);
    let row = state.store().insert_book(&new_book).await?;

    tracing::info!(book_id = %row.id, author_id = %user.user_id, "Book created");

    Ok((StatusCode::CREATED, Json(BookResponse::from(row))))
}

/// GET /api/books/{id}/ - Retrieve a book.
async fn get_book(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<BookResponse>> {
    let row = state.store().get_book(id).await?;
    Ok(Json(BookResponse::from(row)))
}

/// PUT /api/books/{id}/ - Full update.
async fn update_book(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<BookRequest>,
) -> ApiResult<Json<BookResponse>> {
    validate_title(&request.title).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let changes = BookChanges {
        title: Some(request.title),
    };
    let row = state.store().update_book(id, &changes).await?;

    Ok(Json(BookResponse::from(row)))
}

/// PATCH /api/books/{id}/ - Partial update.
async fn patch_book(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<PatchBookRequest>,
) -> ApiResult<Json<BookResponse>> {
    if let Some(ref title) = request.title {
        validate_title(title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }

    let changes = BookChanges {
        title: request.title,
    };
    let row = state.store().update_book(id, &changes).await?;

    Ok(Json(BookResponse::from(row)))
}

/// DELETE /api/books/{id}/ - Delete a book. Sections cascade.
async fn delete_book(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store().delete_book(id).await?;

    tracing::info!(book_id = %id, user_id = %user.user_id, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/books/", get(list_books).post(create_book))
        .route(
            "/api/books/{id}/",
            get(get_book)
                .put(update_book)
                .patch(patch_book)
                .delete(delete_book),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_request_deserialize() {
        let json = r#"{"title": "My Book"}"#;
        let request: BookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "My Book");
    }

    #[test]
    fn test_book_request_ignores_client_author() {
        // A client-supplied author field is dropped, not an error.
        let json = r#"{"title": "My Book", "author_id": "not-the-requester"}"#;
        let request: BookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "My Book");
    }

    #[test]
    fn test_book_request_missing_title_defaults_empty() {
        let request: BookRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_empty());
    }

    #[test]
    fn test_patch_book_request_optional_title() {
        let request: PatchBookRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());

        let request: PatchBookRequest = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("New"));
    }

    #[test]
    fn test_book_response_serialize() {
        let row = BookRow {
            id: Uuid::nil(),
            title: "My Book".to_string(),
            author_id: Uuid::nil(),
            created: Utc::now(),
        };
        let json = serde_json::to_string(&BookResponse::from(row)).unwrap();
        assert!(json.contains("\"title\":\"My Book\""));
        assert!(json.contains("author_id"));
        assert!(json.contains("created"));
    }
}
