//! User service - Handles user-related business logic.
//!
//! Maps absent records to `AppError::NotFound` and keeps the
//! blank-query rule of search out of the storage layer.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{SearchTerm, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get the first user with the given id
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Append a validated user to the collection
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// Replace the name of an existing user; other fields are kept
    async fn rename_user(&self, id: i32, name: Option<String>) -> AppResult<User>;

    /// Remove the first user with the given id
    async fn delete_user(&self, id: i32) -> AppResult<User>;

    /// Users whose name or email contains `query`, ignoring case.
    /// A blank or absent query yields no users.
    async fn search_users(&self, query: Option<&str>) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, user: User) -> AppResult<User> {
        let user = self.repo.insert(user).await?;
        tracing::debug!(id = user.id, "User created");
        Ok(user)
    }

    async fn rename_user(&self, id: i32, name: Option<String>) -> AppResult<User> {
        let renamed = self.repo.rename(id, name).await?;
        match renamed {
            Some(user) => {
                tracing::debug!(id, "User renamed");
                Ok(user)
            }
            None => {
                tracing::warn!(id, "Rename of unknown user");
                Err(AppError::NotFound)
            }
        }
    }

    async fn delete_user(&self, id: i32) -> AppResult<User> {
        let removed = self.repo.remove(id).await?;
        match removed {
            Some(user) => {
                tracing::debug!(id, "User deleted");
                Ok(user)
            }
            None => {
                tracing::warn!(id, "Delete of unknown user");
                Err(AppError::NotFound)
            }
        }
    }

    async fn search_users(&self, query: Option<&str>) -> AppResult<Vec<User>> {
        let Some(term) = SearchTerm::parse(query) else {
            return Ok(Vec::new());
        };
        self.repo.search(&term).await
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}
