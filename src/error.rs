//! Error types. Input errors are fatal for a run; promote errors are per record.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::UserId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("user {id} no longer exists")]
    NotFound { id: UserId },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read user list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse user list {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("PROMOTE_TO_ADMINS must be a JSON array of {{email, new_password}} objects: {source}")]
    Setting {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum PromoteError {
    #[error("failed to look up users with email {email}: {source}")]
    Lookup {
        email: String,
        #[source]
        source: StoreError,
    },
    #[error("failed to hash new password for user {user_id}: {source}")]
    Hash {
        user_id: UserId,
        #[source]
        source: bcrypt::BcryptError,
    },
    #[error("failed to save user {user_id} ({email}): {source}")]
    Save {
        user_id: UserId,
        email: String,
        #[source]
        source: StoreError,
    },
}
