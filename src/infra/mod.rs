//! Infrastructure layer - Storage concerns
//!
//! Holds the user collection behind the `UserRepository` abstraction.

pub mod repositories;

pub use repositories::{InMemoryUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
