//! Authentication routes: signup, login, logout.
//!
//! These endpoints keep the historical wire shapes:
//! - signup: `201 {"success": ..., "response": {id, username, email, role}}`
//! - login:  `200 {"detail": ..., "response": {id, email, access_token, refresh_token}}`
//!           or `401 {"detail": "Invalid credentials."}`
//! - logout: `200 {"detail": "Logout successful."}`

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};

use bookwriter_core::{Role, UserId, validate_email, validate_username};
use bookwriter_store::{NewUser, StoreError};

use crate::auth::{self, CurrentUser};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Role name, case-insensitive. Defaults to "collaborator".
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: String,
    pub response: CreatedUser,
}

#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub detail: String,
    pub response: LoginTokens,
}

#[derive(Debug, Serialize)]
pub struct LoginTokens {
    pub id: UserId,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Bare `{"detail": ...}` body used by login failures and logout.
#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/signup - Register a new user.
///
/// Creates the user and its profile in one transaction. The password is
/// argon2-hashed and never echoed back. A duplicate username answers 400.
async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    validate_username(&request.username).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    validate_email(&request.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // Presence only; the contract imposes no minimum length.
    if request.password.is_empty() {
        return Err(ApiError::BadRequest("password: is required".to_string()));
    }

    let role = match request.role.as_deref() {
        None | Some("") => Role::Collaborator,
        Some(s) => s
            .parse::<Role>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
    };

    let password_hash = auth::hash_password(&request.password)?;

    let new_user = NewUser::new(
        request.username.clone(),
        request.email.clone(),
        password_hash,
        role,
    );

    let user = state
        .store()
        .insert_user(&new_user)
        .await
        .map_err(|e| match e {
            StoreError::DuplicateUsername(_) => {
                tracing::warn!(username = %request.username, "Username already exists");
                ApiError::BadRequest("Username already exists.".to_string())
            }
            other => ApiError::Store(other),
        })?;

    tracing::info!(user_id = %user.id, username = %user.username, %role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: "User created successfully.".to_string(),
            response: CreatedUser {
                id: UserId::from_uuid(user.id),
                username: user.username,
                email: user.email,
                role,
            },
        }),
    ))
}

/// POST /api/login - Authenticate and issue a token pair.
///
/// Unknown usernames and wrong passwords produce the same 401 body, so the
/// response never reveals whether the account exists.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Response> {
    let user = state
        .store()
        .get_user_by_username(&request.username)
        .await
        .map_err(|e| ApiError::Store(e).into_response())?;

    let Some(user) = user else {
        tracing::warn!(username = %request.username, "Login failed: unknown username");
        return Err(invalid_credentials());
    };

    let valid = auth::verify_password(&request.password, &user.password_hash)
        .map_err(IntoResponse::into_response)?;
    if !valid {
        tracing::warn!(username = %request.username, "Login failed: wrong password");
        return Err(invalid_credentials());
    }

    let pair =
        auth::issue_token_pair(user.id, state.config()).map_err(IntoResponse::into_response)?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        detail: "Login successful.".to_string(),
        response: LoginTokens {
            id: UserId::from_uuid(user.id),
            email: user.email,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        },
    }))
}

fn invalid_credentials() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(Detail {
            detail: "Invalid credentials.".to_string(),
        }),
    )
        .into_response()
}

/// POST /api/logout - Confirm logout.
///
/// Stateless and idempotent: the client discards its tokens; revocation is
/// out of scope.
async fn logout(user: CurrentUser) -> Json<Detail> {
    tracing::info!(user_id = %user.user_id, "User logged out");
    Json(Detail {
        detail: "Logout successful.".to_string(),
    })
}

/// Build auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_signup_request_deserialize() {
        let json = r#"{"username": "bob", "email": "b@x.com", "password": "pw", "role": "author"}"#;
        let request: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "bob");
        assert_eq!(request.email, "b@x.com");
        assert_eq!(request.password, "pw");
        assert_eq!(request.role.as_deref(), Some("author"));
    }

    #[test]
    fn test_signup_request_missing_fields_default_empty() {
        // Missing fields become empty strings so the handler can answer 400
        // instead of a body-rejection error.
        let request: SignupRequest = serde_json::from_str("{}").unwrap();
        assert!(request.username.is_empty());
        assert!(request.email.is_empty());
        assert!(request.password.is_empty());
        assert!(request.role.is_none());
    }

    #[test]
    fn test_signup_response_serialize() {
        let response = SignupResponse {
            success: "User created successfully.".to_string(),
            response: CreatedUser {
                id: UserId::from_uuid(Uuid::nil()),
                username: "bob".to_string(),
                email: "b@x.com".to_string(),
                role: Role::Author,
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\""));
        assert!(json.contains("\"role\":\"author\""));
        // The password never appears in any form
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"username": "bob", "password": "pw"}"#;
        let request: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "bob");
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn test_login_response_serialize() {
        let response = LoginResponse {
            detail: "Login successful.".to_string(),
            response: LoginTokens {
                id: UserId::from_uuid(Uuid::nil()),
                email: "b@x.com".to_string(),
                access_token: "access.jwt.here".to_string(),
                refresh_token: "refresh.jwt.here".to_string(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("access_token"));
        assert!(json.contains("refresh_token"));
        assert!(json.contains("Login successful."));
    }

    #[test]
    fn test_detail_serialize() {
        let detail = Detail {
            detail: "Logout successful.".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&detail).unwrap(),
            r#"{"detail":"Logout successful."}"#
        );
    }
}
