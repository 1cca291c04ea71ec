use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims carried by bearer tokens issued by the identity provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// External user identifier (users.sub)
    pub sub: String,
    pub email: Option<String>,
    /// Display name for first-login profile creation
    pub name: Option<String>,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Mint a HS256 JWT access token. Production tokens come from the identity
/// provider; this is for tooling and tests.
pub fn mint_access_token(
    sub: &str,
    email: Option<&str>,
    name: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        email: email.map(str::to_string),
        name: name.map(str::to_string),
        iat,
        exp: iat + security.token_ttl_secs,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify JWT and return claims.
///
/// Expired tokens map to `UNAUTHORIZED_EXPIRED_JWT`; everything else that
/// fails to decode maps to `UNAUTHORIZED_INVALID_JWT`.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}
