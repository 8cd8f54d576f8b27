//! User handlers.
//!
//! One handler per action. Reads render the record(s) as JSON view
//! models; successful writes redirect to the list.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::BoundForm;
use crate::api::AppState;
use crate::config::USERS_PATH;
use crate::domain::{User, UserForm};
use crate::errors::AppResult;
use crate::types::FormResult;

/// Search query string
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Text to look for in name or email
    pub query: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/Index", get(list_users))
        .route("/Details/:id", get(user_details))
        .route("/Create", get(new_user_form).post(create_user))
        .route("/Edit/:id", get(edit_user_form).post(update_user))
        .route("/Delete/:id", get(confirm_delete_user).post(delete_user))
        .route("/Search", get(search_users))
}

/// List all users
#[utoipa::path(
    get,
    path = "/User",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/User/Details/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn user_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Empty create form
#[utoipa::path(
    get,
    path = "/User/Create",
    tag = "Users",
    responses(
        (status = 200, description = "Blank form model", body = UserForm)
    )
)]
pub async fn new_user_form() -> Json<UserForm> {
    Json(UserForm::default())
}

/// Create a user
#[utoipa::path(
    post,
    path = "/User/Create",
    tag = "Users",
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Created, redirect to the list"),
        (status = 400, description = "Body could not be read"),
        (status = 422, description = "Validation failed, submitted form returned with errors")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    form: BoundForm<UserForm>,
) -> AppResult<FormResult<UserForm>> {
    if !form.is_valid() {
        return Ok(FormResult::redisplay(form.model, form.errors));
    }

    state.user_service.create_user(User::from(form.model)).await?;
    Ok(FormResult::Redirect(USERS_PATH))
}

/// Get user for the edit form
#[utoipa::path(
    get,
    path = "/User/Edit/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Current values", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn edit_user_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Update a user.
///
/// Only `name` is copied onto the stored record; `id` and `email`
/// in the payload are ignored.
#[utoipa::path(
    post,
    path = "/User/Edit/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Updated, redirect to the list"),
        (status = 400, description = "Body could not be read"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation failed, submitted form returned with errors")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    form: BoundForm<UserForm>,
) -> AppResult<FormResult<UserForm>> {
    if !form.is_valid() {
        return Ok(FormResult::redisplay(form.model, form.errors));
    }

    state.user_service.rename_user(id, form.model.name).await?;
    Ok(FormResult::Redirect(USERS_PATH))
}

/// Get user for the delete confirmation
#[utoipa::path(
    get,
    path = "/User/Delete/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User to be deleted", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn confirm_delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Delete a user. Any submitted form body is ignored.
#[utoipa::path(
    post,
    path = "/User/Delete/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 302, description = "Deleted, redirect to the list"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<FormResult<User>> {
    state.user_service.delete_user(id).await?;
    Ok(FormResult::Redirect(USERS_PATH))
}

/// Search users by name or email
#[utoipa::path(
    get,
    path = "/User/Search",
    tag = "Users",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching users in insertion order, empty for a blank query", body = Vec<User>)
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<User>>> {
    let users = state
        .user_service
        .search_users(params.query.as_deref())
        .await?;
    Ok(Json(users))
}
