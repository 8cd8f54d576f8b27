//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{User, UserForm};
use crate::types::FieldError;

/// OpenAPI documentation for the User administration service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Admin",
        version = "0.1.0",
        description = "In-memory user administration: list, details, create, edit, delete and search",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::user_details,
        user_handler::new_user_form,
        user_handler::create_user,
        user_handler::edit_user_form,
        user_handler::update_user,
        user_handler::confirm_delete_user,
        user_handler::delete_user,
        user_handler::search_users,
    ),
    components(
        schemas(
            User,
            UserForm,
            FieldError,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
