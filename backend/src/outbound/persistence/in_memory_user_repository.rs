//! Mutex-guarded in-memory user repository.
//!
//! A single exclusive lock covers both the record map and the identifier
//! counter, so every operation is linearised with respect to every other.
//! The lock is never held across an `.await`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug)]
struct Store {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: UserId::FIRST,
        }
    }
}

/// Process-lifetime user storage.
///
/// Identifiers start at 1, increase monotonically, and are never reused,
/// even after the record holding them is deleted.
///
/// # Examples
/// ```
/// use user_service::domain::UserDraft;
/// use user_service::domain::ports::UserRepository;
/// use user_service::outbound::persistence::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let ann = repo.create(UserDraft::new("Ann", "ann@x.com")).await.unwrap();
/// assert_eq!(ann.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().users.is_empty()
    }

    // Every mutation leaves the store consistent before it can panic, so a
    // poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, draft: UserDraft) -> Result<User, UserRepositoryError> {
        let mut store = self.lock();
        let id = store.next_id;
        let user = draft.into_user(id);
        store.users.insert(id, user.clone());
        store.next_id = id.successor();
        debug!(user_id = %id, "user stored");
        Ok(user)
    }

    async fn read(&self, id: UserId) -> Result<User, UserRepositoryError> {
        self.lock()
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| UserRepositoryError::not_found(id))
    }

    async fn update(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut store = self.lock();
        let id = user.id();
        let slot = store
            .users
            .get_mut(&id)
            .ok_or_else(|| UserRepositoryError::not_found(id))?;
        *slot = user.clone();
        debug!(user_id = %id, "user replaced");
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        if self.lock().users.remove(&id).is_none() {
            return Err(UserRepositoryError::not_found(id));
        }
        debug!(user_id = %id, "user removed");
        Ok(())
    }
}
