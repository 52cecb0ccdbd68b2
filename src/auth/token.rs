use crate::error::AppError;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::HttpRequest;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the session cookie carrying the JWT.
pub const SESSION_COOKIE: &str = "jwt";

/// Represents the claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: Uuid,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Issues a signed session token for a user id.
///
/// Pure apart from reading the clock: the caller is responsible for attaching
/// the token to the response as a cookie (see [`session_cookie`]).
pub fn generate_token(
    user_id: Uuid,
    secret: &str,
    expiration_hours: i64,
) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(expiration_hours))
        .ok_or_else(|| AppError::Internal("Token expiration out of range".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies a session token and decodes its claims.
///
/// Checks the signature and expiration; fails with `AppError::NotAuthorized`
/// on tampering, a wrong signature, or expiry.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::NotAuthorized(format!("Invalid token: {}", e)))
}

/// Reads the session token from the request's `jwt` cookie.
/// Absence is not an error; callers decide what a missing token means.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Builds the HTTP-only session cookie carrying `token`.
/// `secure` is set outside local-development mode.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(secure)
        .finish()
}

/// Builds a cookie that instructs the client to drop the session cookie.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::ZERO)
        .finish()
}
