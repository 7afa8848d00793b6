use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::config_model::Auth;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: usize,
}

#[derive(Debug)]
pub struct AuthError(anyhow::Error);

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError(err)
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn validate_session_jwt(token: &str, secret: &str) -> Result<SessionClaims, AuthError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the authenticated user id from the bearer header, falling back
/// to the session cookie. Missing, malformed or expired tokens yield `None`.
pub fn authenticated_user_id(headers: &HeaderMap, jar: &CookieJar, auth: &Auth) -> Option<Uuid> {
    let token = match bearer_token(headers) {
        Some(token) => token.to_string(),
        None => jar.get(&auth.session_cookie)?.value().to_string(),
    };

    let claims = match validate_session_jwt(&token, &auth.jwt_secret) {
        Ok(claims) => claims,
        Err(err) => {
            debug!(error = %err, "auth: rejected session token");
            return None;
        }
    };

    match Uuid::parse_str(&claims.sub) {
        Ok(user_id) => Some(user_id),
        Err(_) => {
            debug!("auth: session token subject is not a user id");
            None
        }
    }
}
