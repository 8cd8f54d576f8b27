//! User Admin - in-memory user administration over HTTP
//!
//! Lists, shows, creates, edits, deletes and searches `User` records held
//! in an ordered in-memory collection that lives as long as the server.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record, form model and search term
//! - **infra**: The in-memory user store
//! - **services**: Use cases (not-found mapping, search rules)
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{SearchTerm, User, UserForm};
pub use errors::{AppError, AppResult};
pub use infra::InMemoryUserStore;
