//! # Account use cases — register, login, logout, current session
//!
//! Each function takes the [`Store`] it operates on; none of them keep state of
//! their own. The session is the `loggedInUser` copy inside the [`Database`](crate::Database).
//!
//! | Function | Effect on the document |
//! |----------|------------------------|
//! | [`register`] | appends a [`User`] unless the e-mail or username is taken |
//! | [`login`] | sets the session to the first user with matching e-mail and password |
//! | [`logout`] | clears the session |
//! | [`current_user`] | none beyond the self-healing check done by [`Store::load`] |

use tracing::info;

use crate::db::{KeyValueStore, Store};
use crate::error::{AppError, Field, Result};
use crate::models::{Registration, User};

/// Create a new account. The e-mail check runs before the username check.
pub fn register<K: KeyValueStore>(store: &Store<K>, input: Registration) -> Result<User> {
    let Registration {
        username,
        email,
        password,
    } = input;

    if username.is_empty() {
        return Err(AppError::ValidationFailed(Field::Username));
    }
    if email.is_empty() {
        return Err(AppError::ValidationFailed(Field::Email));
    }
    if password.is_empty() {
        return Err(AppError::ValidationFailed(Field::Password));
    }

    store.update(|db| {
        if db.user_by_email(&email).is_some() {
            return Err(AppError::DuplicateEmail);
        }
        if db.user_by_username(&username).is_some() {
            return Err(AppError::DuplicateUsername);
        }

        let user = User {
            id: Store::<K>::next_id(db),
            username,
            email,
            password,
        };
        db.users.push(user.clone());
        info!(user_id = user.id, username = %user.username, "registered user");
        Ok(user)
    })
}

/// Start a session for the user matching `email` and `password` exactly.
pub fn login<K: KeyValueStore>(store: &Store<K>, email: &str, password: &str) -> Result<User> {
    store.update(|db| {
        let user = db
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
            .ok_or(AppError::InvalidCredentials)?;
        db.logged_in_user = Some(user.clone());
        info!(user_id = user.id, "logged in");
        Ok(user)
    })
}

/// End the current session, if any.
pub fn logout<K: KeyValueStore>(store: &Store<K>) -> Result<()> {
    store.update(|db| {
        if let Some(user) = db.logged_in_user.take() {
            info!(user_id = user.id, "logged out");
        }
        Ok(())
    })
}

/// The user of the current session, after the stale-session check.
pub fn current_user<K: KeyValueStore>(store: &Store<K>) -> Result<Option<User>> {
    Ok(store.load()?.logged_in_user)
}
