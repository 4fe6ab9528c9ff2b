//! Port abstraction for user storage adapters and their errors.
//!
//! The contract is four operations with a single failure kind. A durable
//! adapter can replace the in-memory one without touching callers as long as
//! it keeps these semantics:
//!
//! - `create` ignores any caller identifier and always succeeds.
//! - `read`, `update`, and `delete` raise [`UserRepositoryError::NotFound`]
//!   for unknown identifiers and leave the store untouched.
//! - `update` never inserts.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{Error, User, UserDraft, UserId};

/// Errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// No record exists for the identifier.
    #[error("user {id} not found")]
    NotFound {
        /// Identifier the caller asked for.
        id: UserId,
    },
}

impl UserRepositoryError {
    /// Build a [`UserRepositoryError::NotFound`].
    pub fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }
}

impl From<UserRepositoryError> for Error {
    fn from(value: UserRepositoryError) -> Self {
        match value {
            UserRepositoryError::NotFound { id } => {
                Error::not_found("user not found").with_details(json!({ "id": id }))
            }
        }
    }
}

/// Storage for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new record under the next identifier and return it.
    async fn create(&self, draft: UserDraft) -> Result<User, UserRepositoryError>;

    /// Fetch the record stored under `id`.
    async fn read(&self, id: UserId) -> Result<User, UserRepositoryError>;

    /// Replace the record stored under `user.id()` and return the new value.
    async fn update(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Remove the record stored under `id`.
    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError>;
}
