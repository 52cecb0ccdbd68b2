//!
//! # Auth Gate Middleware
//!
//! Route guards for the two session states a request can be in:
//!
//! - [`RequireAuth`] protects resource routes: a valid session cookie attaches
//!   the caller's identity to the request, anything else is rejected with 403.
//! - [`RequireAnonymous`] protects registration and login: an established
//!   session is rejected with 409, while an invalid or expired cookie is
//!   deliberately treated as "not logged in" so a stale token never blocks
//!   anonymous actions.
//!
//! Guards short-circuit with a structured `AppError` response; they never
//! reach the wrapped handler on rejection.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::extractors::AuthenticatedUser;
use crate::auth::token::{session_token, verify_token};
use crate::config::Config;
use crate::error::AppError;

/// Resolves the session cookie on `req` to an authenticated identity, if any.
/// Verification failures are folded into `None`; each guard decides what an
/// absent identity means.
fn identity_from_request(req: &ServiceRequest, secret: &str) -> Option<AuthenticatedUser> {
    session_token(req.request())
        .and_then(|token| verify_token(&token, secret).ok())
        .map(|claims| AuthenticatedUser(claims.sub))
}

fn secret_from_app_data(req: &ServiceRequest) -> Result<String, AppError> {
    req.app_data::<web::Data<Config>>()
        .map(|config| config.secret_key.clone())
        .ok_or_else(|| AppError::Internal("Server configuration not available".into()))
}

/// Guard for routes that require an authenticated caller.
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthService { service }))
    }
}

pub struct RequireAuthService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let secret = match secret_from_app_data(&req) {
            Ok(secret) => secret,
            Err(err) => {
                let response = err.error_response().map_into_right_body();
                return Box::pin(async move { Ok(req.into_response(response)) });
            }
        };

        match identity_from_request(&req, &secret) {
            Some(user) => {
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            None => {
                // Absent and invalid tokens are rejected alike.
                let err =
                    AppError::Permission("You need to be logged to perform this action!".into());
                let response = err.error_response().map_into_right_body();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}

/// Guard for routes that require an anonymous caller (registration, login).
pub struct RequireAnonymous;

impl<S, B> Transform<S, ServiceRequest> for RequireAnonymous
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAnonymousService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAnonymousService { service }))
    }
}

pub struct RequireAnonymousService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireAnonymousService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let secret = match secret_from_app_data(&req) {
            Ok(secret) => secret,
            Err(err) => {
                let response = err.error_response().map_into_right_body();
                return Box::pin(async move { Ok(req.into_response(response)) });
            }
        };

        match identity_from_request(&req, &secret) {
            Some(_) => {
                let err = AppError::Conflict("You are already logged in the system!".into());
                let response = err.error_response().map_into_right_body();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
            None => {
                // A missing, expired, or tampered token all mean "not logged in"
                // here; the request proceeds as anonymous.
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
        }
    }
}
