//! Form binding extractor - Combines deserialization with validation.
//!
//! Unlike a rejecting extractor, a model that fails validation is still
//! handed to the handler together with its field errors, so the handler
//! can redisplay what the user entered.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;
use crate::types::FieldError;

/// Bound request body plus the validation outcome.
///
/// Accepts `application/json`; anything else is read as
/// `application/x-www-form-urlencoded`. A body that cannot be
/// deserialized at all is rejected with 400.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(form: BoundForm<UserForm>) -> FormResult<UserForm> {
///     if !form.is_valid() {
///         return FormResult::redisplay(form.model, form.errors);
///     }
///     // model is valid here
/// }
/// ```
#[derive(Debug)]
pub struct BoundForm<T> {
    pub model: T,
    pub errors: Vec<FieldError>,
}

impl<T> BoundForm<T> {
    /// Whether every validation rule passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for BoundForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let model = if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            value
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            value
        };

        let errors = match model.validate() {
            Ok(()) => Vec::new(),
            Err(e) => collect_field_errors(&e),
        };

        Ok(BoundForm { model, errors })
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

/// Flatten validation errors, ordered by field name
fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field.to_string(), message)
            })
        })
        .collect();

    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}
