//! Shared types for DRY compliance.

mod response;

pub use response::{FieldError, FormResult, Redisplay};
