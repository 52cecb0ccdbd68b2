use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{
    generate_token, removal_cookie, session_cookie, verify_password, AuthResponse,
    AuthenticatedUser, LoginRequest,
};
use crate::config::Config;
use crate::error::AppError;
use crate::models::{UserInput, UserUpdate};
use crate::services::users;
use crate::store::{PgStore, UserStore};

/// Registers a new user account.
///
/// Requires an anonymous caller (see `RequireAnonymous`). Returns `201` with
/// the generated id only; the caller logs in separately.
pub async fn register(
    store: web::Data<PgStore>,
    config: web::Data<Config>,
    input: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
    input.validate()?;

    let id = users::create(store.get_ref(), input.into_inner(), config.salt_rounds).await?;

    Ok(HttpResponse::Created().json(AuthResponse { id }))
}

/// Authenticates a user and establishes a session.
///
/// An unknown email and a wrong password produce the identical error message
/// and status so the response never leaks which part failed. On success the
/// session token is set as an HTTP-only cookie and the body carries the id.
pub async fn login(
    store: web::Data<PgStore>,
    config: web::Data<Config>,
    credentials: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    credentials.validate()?;

    let user = store
        .find_user_by_email(&credentials.email)
        .await?
        .ok_or_else(|| AppError::NotAuthorized("Email or password incorrect!".into()))?;

    if !verify_password(&credentials.password, &user.password)? {
        return Err(AppError::NotAuthorized("Email or password incorrect!".into()));
    }

    let token = generate_token(user.id, &config.secret_key, config.jwt_expiration_hours)?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, config.cookie_secure()))
        .json(AuthResponse { id: user.id }))
}

/// Ends the session by instructing the client to drop the cookie. Tokens are
/// stateless, so nothing is revoked server-side.
pub async fn logout(_user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::NoContent().cookie(removal_cookie()).finish())
}

/// Updates a user profile. Self-only.
pub async fn update(
    store: web::Data<PgStore>,
    config: web::Data<Config>,
    user_id: web::Path<Uuid>,
    input: web::Json<UserUpdate>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    input.validate()?;

    users::update(
        store.get_ref(),
        input.into_inner(),
        user_id.into_inner(),
        user.0,
        config.salt_rounds,
    )
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Fetches a user profile. The password hash is never serialized.
pub async fn get_profile(
    store: web::Data<PgStore>,
    user_id: web::Path<Uuid>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = users::get_profile(store.get_ref(), user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}
