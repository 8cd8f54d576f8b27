//! User repository backed by an in-memory ordered collection.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{SearchTerm, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups by id scan in insertion order and act on the first match;
/// duplicate ids are allowed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// First user with the given id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Append a user to the end of the collection
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Set the name of the first user with the given id, in place
    async fn rename(&self, id: i32, name: Option<String>) -> AppResult<Option<User>>;

    /// Remove the first user with the given id
    async fn remove(&self, id: i32) -> AppResult<Option<User>>;

    /// Users matching the term, in insertion order
    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

/// Process-lifetime user collection guarded by a read/write lock.
///
/// Each operation holds the lock for its whole find-then-mutate sequence.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `users`, order preserved
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Drop every record, returning the store to its initial state
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }
}

fn position_of(users: &[User], id: i32) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn rename(&self, id: i32, name: Option<String>) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.rename(name);
            user.clone()
        }))
    }

    async fn remove(&self, id: i32) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(position_of(&users, id).map(|index| users.remove(index)))
    }

    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| term.matches(u)).cloned().collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }
}
