use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;

/// The authenticated caller's identity, threaded explicitly from the auth
/// gate into handler invocations.
///
/// [`RequireAuth`](crate::auth::guards::RequireAuth) validates the session
/// cookie and inserts this value into request extensions; handlers receive it
/// through this extractor instead of reading a shared mutable request field.
///
/// If the identity is missing (the guard did not run), extraction fails with
/// the same 403 the guard itself would have produced.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError; // AppError converts into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>().copied() {
            Some(user) => ready(Ok(user)),
            None => {
                let err =
                    AppError::Permission("You need to be logged to perform this action!".into());
                ready(Err(err.into()))
            }
        }
    }
}
