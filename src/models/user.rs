use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a user account as stored in the database.
///
/// The password hash is never serialized: profile responses expose every
/// field except `password`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    /// bcrypt digest of the user's password. Excluded from JSON output.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub company: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload. The password arrives in plaintext and is hashed
/// before it ever reaches the store.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub company: String,
    pub photo: Option<String>,
}

/// Profile update payload. Identical to `UserInput` except that the password
/// is optional: when absent the stored hash is left untouched.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub company: String,
    pub photo: Option<String>,
}
