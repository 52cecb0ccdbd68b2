//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management: every domain error is
//! constructed with a human-readable message and propagates unchanged from the
//! services up to a single boundary translator.
//!
//! `AppError` implements `actix_web::error::ResponseError` so application errors
//! convert into HTTP responses with a `{"error": msg}` JSON body. `From` impls
//! for `sqlx::Error`, `validator::ValidationErrors`, `jsonwebtoken::errors::Error`,
//! and `bcrypt::BcryptError` allow conversion with the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// A request referenced a missing resource or carried a bad identifier (HTTP 400).
    InvalidParam(String),
    /// A failed credential check during login (HTTP 401).
    NotAuthorized(String),
    /// The caller is not entitled to the action, or is not authenticated at all (HTTP 403).
    Permission(String),
    /// The request conflicts with existing state, e.g. a duplicate email or an
    /// already-established session (HTTP 409).
    Conflict(String),
    /// Failed input validation on a request body (HTTP 422 Unprocessable Entity).
    Validation(String),
    /// An error originating from database operations (HTTP 500).
    Database(String),
    /// An unexpected server-side error not covered by the other variants (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::InvalidParam(msg) => write!(f, "Invalid Parameter: {}", msg),
            AppError::NotAuthorized(msg) => write!(f, "Not Authorized: {}", msg),
            AppError::Permission(msg) => write!(f, "Permission Denied: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This is the single boundary translator: Actix Web uses it to turn `AppError`
/// results from handlers and middleware into status codes and JSON error bodies.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidParam(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotAuthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Permission(msg) => HttpResponse::Forbidden().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "error": msg
            })),
            AppError::Validation(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
            // Database errors are presented as generic internal server errors to the client.
            AppError::Database(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            AppError::Internal(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::InvalidParam("Record not found".into()),
            _ => AppError::Database(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// JWT processing failures (bad signature, expiry, malformed token) count as
/// failed authentication.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::NotAuthorized(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
