//! Subsection routes.
//!
//! - GET  /api/subsections/        - List all subsections
//! - POST /api/subsections/        - Create a subsection
//! - GET/PUT/PATCH/DELETE /api/subsections/{id}/ - Detail operations
//!
//! Subsections are leaf nodes under a section; no further nesting.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookwriter_core::{SectionId, SubsectionId, validate_title};
use bookwriter_store::{NewSubsection, SubsectionChanges, SubsectionRow};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Wire representation of a subsection.
#[derive(Debug, Serialize)]
pub struct SubsectionResponse {
    pub id: SubsectionId,
    pub title: String,
    pub section_id: SectionId,
    pub created: DateTime<Utc>,
}

impl From<SubsectionRow> for SubsectionResponse {
    fn from(row: SubsectionRow) -> Self {
        Self {
            id: SubsectionId::from_uuid(row.id),
            title: row.title,
            section_id: SectionId::from_uuid(row.section_id),
            created: row.created,
        }
    }
}

/// Body for POST and PUT. `section_id` is also accepted as `parent_section`.
#[derive(Debug, Deserialize)]
pub struct SubsectionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(alias = "parent_section")]
    pub section_id: Option<SectionId>,
}

/// Body for PATCH.
#[derive(Debug, Deserialize)]
pub struct PatchSubsectionRequest {
    pub title: Option<String>,
    #[serde(alias = "parent_section")]
    pub section_id: Option<SectionId>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/subsections/ - List all subsections.
async fn list_subsections(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<SubsectionResponse>>> {
    let rows = state.store().list_subsections().await?;
    Ok(Json(
        rows.into_iter().map(SubsectionResponse::from).collect(),
    ))
}

/// POST /api/subsections/ - Create a subsection.
async fn create_subsection(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<SubsectionRequest>,
) -> ApiResult<(StatusCode, Json<SubsectionResponse>)> {
    validate_title(&request.title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let section_id = request
        .section_id
        .ok_or_else(|| ApiError::BadRequest("section_id: is required".to_string()))?;

    let new_subsection = NewSubsection::new(request.title, section_id.0);
    let row = state.store().insert_subsection(&new_subsection).await?;

    tracing::info!(
        subsection_id = %row.id,
        section_id = %row.section_id,
        user_id = %user.user_id,
        "Subsection created"
    );

    Ok((StatusCode::CREATED, Json(SubsectionResponse::from(row))))
}

/// GET /api/subsections/{id}/ - Retrieve a subsection.
async fn get_subsection(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SubsectionResponse>> {
    let row = state.store().get_subsection(id).await?;
    Ok(Json(SubsectionResponse::from(row)))
}

/// PUT /api/subsections/{id}/ - Full update.
async fn update_subsection(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<SubsectionRequest>,
) -> ApiResult<Json<SubsectionResponse>> {
    validate_title(&request.title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let section_id = request
        .section_id
        .ok_or_else(|| ApiError::BadRequest("section_id: is required".to_string()))?;

    let changes = SubsectionChanges {
        title: Some(request.title),
        section_id: Some(section_id.0),
    };
    let row = state.store().update_subsection(id, &changes).await?;

    Ok(Json(SubsectionResponse::from(row)))
}

/// PATCH /api/subsections/{id}/ - Partial update.
async fn patch_subsection(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<PatchSubsectionRequest>,
) -> ApiResult<Json<SubsectionResponse>> {
    if let Some(ref title) = request.title {
        validate_title(title).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }

    let changes = SubsectionChanges {
        title: request.title,
        section_id: request.section_id.map(|id| id.0),
    };
    let row = state.store().update_subsection(id, &changes).await?;

    Ok(Json(SubsectionResponse::from(row)))
}

/// DELETE /api/subsections/{id}/ - Delete a subsection.
async fn delete_subsection(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store().delete_subsection(id).await?;

    tracing::info!(subsection_id = %id, user_id = %user.user_id, "Subsection deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build subsection routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/subsections/",
            get(list_subsections).post(create_subsection),
        )
        .route(
            "/api/subsections/{id}/",
            get(get_subsection)
                .put(update_subsection)
                .patch(patch_subsection)
                .delete(delete_subsection),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsection_request_deserialize() {
        let json = format!(
            r#"{{"title": "1.1.1", "section_id": "{}"}}"#,
            Uuid::nil()
        );
        let request: SubsectionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.title, "1.1.1");
        assert!(request.section_id.is_some());
    }

    #[test]
    fn test_subsection_request_accepts_parent_section_alias() {
        let json = format!(
            r#"{{"title": "1.1.1", "parent_section": "{}"}}"#,
            Uuid::nil()
        );
        let request: SubsectionRequest = serde_json::from_str(&json).unwrap();
        assert!(request.section_id.is_some());
    }

    #[test]
    fn test_subsection_request_missing_section() {
        let request: SubsectionRequest = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert!(request.section_id.is_none());
    }

    #[test]
    fn test_subsection_response_serialize() {
        let row = SubsectionRow {
            id: Uuid::nil(),
            title: "1.1.1".to_string(),
            section_id: Uuid::nil(),
            created: Utc::now(),
        };
        let json = serde_json::to_string(&SubsectionResponse::from(row)).unwrap();
        assert!(json.contains("\"title\":\"1.1.1\""));
        assert!(json.contains("section_id"));
    }
}
