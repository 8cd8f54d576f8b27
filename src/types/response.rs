use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// One failed validation rule on a submitted field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Field name as submitted
    #[schema(example = "name")]
    pub field: String,
    /// Human readable reason
    #[schema(example = "Name is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Submitted model sent back unchanged together with its errors
#[derive(Debug, Serialize)]
pub struct Redisplay<T: Serialize> {
    pub model: T,
    pub errors: Vec<FieldError>,
}

/// Outcome of a form submission (DRY - shared by every POST action)
#[derive(Debug)]
pub enum FormResult<T: Serialize> {
    /// Saved; continue at the given location
    Redirect(&'static str),
    /// Rejected by validation; show the form again
    Redisplay(Redisplay<T>),
}

impl<T: Serialize> FormResult<T> {
    pub fn redisplay(model: T, errors: Vec<FieldError>) -> Self {
        FormResult::Redisplay(Redisplay { model, errors })
    }
}

impl<T: Serialize> IntoResponse for FormResult<T> {
    fn into_response(self) -> Response {
        match self {
            FormResult::Redirect(location) => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            FormResult::Redisplay(body) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}
