//! Authentication module: JWT token management, password hashing, and the
//! role-based capability checks.
//!
//! Login issues a pair of HS256 tokens: a short-lived access token and a
//! long-lived refresh token, distinguished by the `token_type` claim. Only
//! access tokens authenticate API requests.
//!
//! The capability checks read the requester's stored profile role on every
//! request; the profile is the single source of truth for authorization.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use bookwriter_core::{Role, UserId};
use bookwriter_store::StoreError;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Token type claim value for access tokens.
pub const TOKEN_TYPE_ACCESS: &str = "access";
/// Token type claim value for refresh tokens.
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject).
    pub sub: Uuid,
    /// Token type ("access" or "refresh").
    pub token_type: String,
    /// Expiration time (unix timestamp).
    pub exp: usize,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

/// The access/refresh token pair issued at login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Issue an access/refresh token pair for a user.
pub fn issue_token_pair(user_id: Uuid, config: &ServerConfig) -> Result<TokenPair, ApiError> {
    let access_token = create_token(
        user_id,
        TOKEN_TYPE_ACCESS,
        &config.jwt_secret,
        chrono::Duration::minutes(config.access_token_expiry_minutes as i64),
    )?;
    let refresh_token = create_token(
        user_id,
        TOKEN_TYPE_REFRESH,
        &config.jwt_secret,
        chrono::Duration::days(config.refresh_token_expiry_days as i64),
    )?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Create a JWT token for a user.
pub fn create_token(
    user_id: Uuid,
    token_type: &str,
    secret: &str,
    lifetime: chrono::Duration,
) -> Result<String, ApiError> {
    let now = chrono::Utc::now();
    let exp = (now + lifetime).timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        token_type: token_type.to_string(),
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to create token: {}", e)))
}

/// Validate a JWT token and return claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Authenticated requester extracted from a bearer access token.
///
/// The explicit per-request identity passed to handlers; nothing is read
/// from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// User ID from the token subject.
    pub user_id: UserId,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::Unauthorized("Authorization header must be Bearer <token>".to_string())
        })?;

        let claims = validate_token(token.trim(), &state.config().jwt_secret)?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(ApiError::Unauthorized(
                "Refresh tokens cannot be used for API access".to_string(),
            ));
        }

        Ok(CurrentUser {
            user_id: UserId::from_uuid(claims.sub),
        })
    }
}

/// Look up the requester's stored profile role.
///
/// A missing profile means the user has no role at all, which is a
/// forbidden condition rather than a lookup failure.
async fn lookup_role(state: &AppState, user: &CurrentUser) -> Result<Role, ApiError> {
    state
        .store()
        .get_user_role(user.user_id.0)
        .await
        .map_err(|e| match e {
            StoreError::ProfileNotFound(_) => {
                ApiError::Forbidden("No role assigned to this user".to_string())
            }
            other => ApiError::Store(other),
        })
}

/// Capability check: the requester must hold the author role.
pub async fn require_author(state: &AppState, user: &CurrentUser) -> Result<Role, ApiError> {
    let role = lookup_role(state, user).await?;
    if role.is_author() {
        Ok(role)
    } else {
        tracing::warn!(user_id = %user.user_id, %role, "Author role required");
        Err(ApiError::Forbidden("Author role required".to_string()))
    }
}

/// Capability check: the requester must hold the author or collaborator role.
pub async fn require_author_or_collaborator(
    state: &AppState,
    user: &CurrentUser,
) -> Result<Role, ApiError> {
    let role = lookup_role(state, user).await?;
    // With the closed Role enum every profiled user qualifies, but the
    // policy stays explicit so it reads the same as require_author.
    match role {
        Role::Author | Role::Collaborator => Ok(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-not-for-production";

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let a = hash_password("pw").unwrap();
        let b = hash_password("pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_token_roundtrip() {
        let user_id = Uuid::new_v4();
        let token = create_token(
            user_id,
            TOKEN_TYPE_ACCESS,
            TEST_SECRET,
            chrono::Duration::minutes(60),
        )
        .unwrap();

        let claims = validate_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_wrong_secret_rejected() {
        let token = create_token(
            Uuid::new_v4(),
            TOKEN_TYPE_ACCESS,
            TEST_SECRET,
            chrono::Duration::minutes(60),
        )
        .unwrap();

        assert!(validate_token(&token, "a-different-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Expired two hours ago, well past any validation leeway
        let token = create_token(
            Uuid::new_v4(),
            TOKEN_TYPE_ACCESS,
            TEST_SECRET,
            chrono::Duration::hours(-2),
        )
        .unwrap();

        assert!(validate_token(&token, TEST_SECRET).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = create_token(
            Uuid::new_v4(),
            TOKEN_TYPE_ACCESS,
            TEST_SECRET,
            chrono::Duration::minutes(60),
        )
        .unwrap();

        let mut tampered = token.clone();
        tampered.truncate(token.len() - 4);
        tampered.push_str("AAAA");
        assert!(validate_token(&tampered, TEST_SECRET).is_err());
    }

    #[test]
    fn test_token_pair_types() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let pair = issue_token_pair(user_id, &config).unwrap();

        let access = validate_token(&pair.access_token, TEST_SECRET).unwrap();
        let refresh = validate_token(&pair.refresh_token, TEST_SECRET).unwrap();

        assert_eq!(access.token_type, TOKEN_TYPE_ACCESS);
        assert_eq!(refresh.token_type, TOKEN_TYPE_REFRESH);
        assert_eq!(access.sub, user_id);
        assert_eq!(refresh.sub, user_id);
        // Refresh outlives access
        assert!(refresh.exp > access.exp);
    }

    fn test_config() -> ServerConfig {
        ServerConfig {
            database_url: String::new(),
            port: 8000,
            log_level: "info".into(),
            cors_allowed_origins: "*".into(),
            jwt_secret: TEST_SECRET.into(),
            access_token_expiry_minutes: 60,
            refresh_token_expiry_days: 30,
        }
    }
}
