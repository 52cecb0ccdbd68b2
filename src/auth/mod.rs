pub mod extractors;
pub mod guards;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use guards::{RequireAnonymous, RequireAuth};
pub use password::{hash_password, verify_password};
pub use token::{
    generate_token, removal_cookie, session_cookie, session_token, verify_token, Claims,
    SESSION_COOKIE,
};

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address.
    #[validate(email)]
    pub email: String,
    /// User's password.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Response body for successful registration and login. The session token
/// itself travels only in the `jwt` cookie, never in the body.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The unique identifier of the authenticated user.
    pub id: uuid::Uuid,
}
