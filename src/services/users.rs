use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::models::{User, UserInput, UserUpdate};
use crate::store::{NewUser, UserChanges, UserStore};

/// Registers a new user account.
///
/// Fails with `Conflict` if the email is already registered, regardless of any
/// other field differences. The password is hashed before it reaches the
/// store; only the generated id is returned.
pub async fn create<S: UserStore>(
    store: &S,
    input: UserInput,
    salt_rounds: u32,
) -> Result<Uuid, AppError> {
    if store.find_user_by_email(&input.email).await?.is_some() {
        return Err(AppError::Conflict("Email already exists in the system!".into()));
    }

    let password_hash = hash_password(&input.password, salt_rounds)?;

    store
        .insert_user(NewUser {
            name: input.name,
            email: input.email,
            password_hash,
            birth_date: input.birth_date,
            sex: input.sex,
            company: input.company,
            photo: input.photo,
        })
        .await
}

/// Updates a user profile. Self-only: the target id must match the
/// authenticated caller.
///
/// Follows the shared ownership-checked mutation pattern: missing resources
/// fail with `InvalidParam` before any permission check, permission mismatches
/// fail before any write reaches the store. A supplied password is re-hashed;
/// an absent one leaves the stored digest untouched.
pub async fn update<S: UserStore>(
    store: &S,
    input: UserUpdate,
    user_id: Uuid,
    logged_user_id: Uuid,
    salt_rounds: u32,
) -> Result<(), AppError> {
    let user = store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::InvalidParam(format!("User with id:{} not found.", user_id)))?;

    if user.id != logged_user_id {
        return Err(AppError::Permission(
            "You do not have permission to perform this action.".into(),
        ));
    }

    let password_hash = match input.password {
        Some(password) => Some(hash_password(&password, salt_rounds)?),
        None => None,
    };

    store
        .update_user(
            user_id,
            UserChanges {
                name: input.name,
                email: input.email,
                password_hash,
                birth_date: input.birth_date,
                sex: input.sex,
                company: input.company,
                photo: input.photo,
            },
        )
        .await
}

/// Fetches a user profile by id.
pub async fn get_profile<S: UserStore>(store: &S, user_id: Uuid) -> Result<User, AppError> {
    store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::InvalidParam(format!("User with id:{} not found.", user_id)))
}
