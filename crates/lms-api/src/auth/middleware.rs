use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use sqlx::types::Uuid;

use super::jwt::verify_identity_token;
use crate::{error::ApiError, state::ApiState};

/// Authenticated caller extractor
///
/// Identity comes from the external auth provider as a bearer token signed
/// with the shared secret. Use this in route handlers to require an
/// authenticated caller; every mutating operation takes it as an explicit
/// parameter instead of consulting a global "current user".
///
/// # Example
/// ```
/// use axum::extract::State;
/// use lms_api::{auth::Identity, error::ApiError, state::ApiState};
///
/// async fn protected_route(
///     identity: Identity,
///     State(state): State<ApiState>,
/// ) -> Result<(), ApiError> {
///     // identity.user_id, identity.name, and identity.is_admin are available
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub name: String,
    /// Gates destructive/administrative operations, never ordering.
    pub is_admin: bool,
}

impl<S> FromRequestParts<S> for Identity
where
    ApiState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = ApiState::from_ref(state);

        // Get the bearer token from the Authorization header
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthenticated)?;

        // Verify the token
        let claims = verify_identity_token(token, &state.jwt_secret)?;

        // Parse user_id from claims
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthenticated)?;

        Ok(Identity {
            user_id,
            name: claims.name,
            is_admin: claims.admin,
        })
    }
}

impl Identity {
    /// Reject callers without the admin flag; used by hard-delete handlers.
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(ApiError::Forbidden(
                "administrator privileges required".to_string(),
            ))
        }
    }
}
