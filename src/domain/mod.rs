//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod search;
pub mod user;

pub use search::SearchTerm;
pub use user::{User, UserForm};
