use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

use crate::error::ApiError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id as string
    pub name: String,
    pub admin: bool,
    pub exp: usize,
    pub iat: usize,
}

/// Generate an identity token for a user
///
/// In production the external auth provider issues these; this function
/// exists for local tooling and tests, which share the HS256 secret.
pub fn generate_identity_token(
    user_id: Uuid,
    name: String,
    admin: bool,
    jwt_secret: &str,
) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        name,
        admin,
        iat: now.timestamp() as usize,
        exp: (now + chrono::Duration::hours(24)).timestamp() as usize,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|_| ApiError::Unauthenticated)?;

    Ok(token)
}

/// Verify and decode an identity token
pub fn verify_identity_token(token: &str, jwt_secret: &str) -> Result<Claims, ApiError> {
    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthenticated)?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_verify_identity_token() {
        let user_id = Uuid::new_v4();
        let secret = "test_jwt_secret_minimum_32_characters_long";

        // Generate token
        let token = generate_identity_token(user_id, "Test Instructor".to_string(), false, secret)
            .expect("Failed to generate token");

        assert!(!token.is_empty(), "Token should not be empty");

        // Verify token
        let claims = verify_identity_token(&token, secret).expect("Failed to verify token");

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.name, "Test Instructor");
        assert!(!claims.admin);
        assert!(
            claims.exp > claims.iat,
            "Expiration should be after issued at"
        );
    }

    #[test]
    fn test_verify_identity_token_with_wrong_secret() {
        let user_id = Uuid::new_v4();
        let secret = "test_jwt_secret_minimum_32_characters_long";
        let wrong_secret = "wrong_jwt_secret_minimum_32_characters_long";

        // Generate token with correct secret
        let token = generate_identity_token(user_id, "Test".to_string(), false, secret)
            .expect("Failed to generate token");

        // Try to verify with wrong secret
        let result = verify_identity_token(&token, wrong_secret);

        assert!(
            matches!(result, Err(ApiError::Unauthenticated)),
            "Verification should fail with wrong secret"
        );
    }

    #[test]
    fn test_verify_invalid_identity_token() {
        let secret = "test_jwt_secret_minimum_32_characters_long";
        let invalid_token = "invalid.jwt.token";

        let result = verify_identity_token(invalid_token, secret);

        assert!(
            matches!(result, Err(ApiError::Unauthenticated)),
            "Verification should fail for invalid token"
        );
    }

    #[test]
    fn test_admin_flag_round_trips() {
        let user_id = Uuid::new_v4();
        let secret = "test_jwt_secret_minimum_32_characters_long";

        let token = generate_identity_token(user_id, "Admin".to_string(), true, secret)
            .expect("Failed to generate token");
        let claims = verify_identity_token(&token, secret).expect("Failed to verify token");

        assert!(claims.admin);
    }

    #[test]
    fn test_token_expiration_window() {
        let user_id = Uuid::new_v4();
        let secret = "test_jwt_secret_minimum_32_characters_long";

        let token = generate_identity_token(user_id, "Test".to_string(), false, secret)
            .expect("Failed to generate token");
        let claims = verify_identity_token(&token, secret).expect("Failed to verify token");

        // Token should expire in approximately 24 hours (86400 seconds)
        let expiration_duration = claims.exp - claims.iat;
        assert!(
            (86390..=86410).contains(&expiration_duration),
            "Token should expire in approximately 24 hours, got {expiration_duration} seconds"
        );
    }
}
