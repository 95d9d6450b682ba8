//! User directory handlers.
//!
//! ```text
//! GET  /users
//! POST /users {"name":"Ada","email":"ada@example.com"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate_new_user;

/// Request body for `POST /users`.
///
/// Handlers validate the raw JSON rather than deserialising into this type,
/// so that type mismatches are reported per field. It exists to describe the
/// payload in the OpenAPI document.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name; must be non-empty.
    #[schema(example = "Ada")]
    pub name: String,
    /// Email address in `local@domain` form.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Response body for `GET /users`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UsersResponse {
    /// Every stored user, oldest first.
    pub users: Vec<User>,
}

/// List every stored user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users::list_users;
///
/// let _app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Stored users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(UsersResponse { users }))
}

/// Validate and store a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid request body", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let user = validate_new_user(&payload)?;
    state.registration.register(user).await?;
    Ok(HttpResponse::Created().finish())
}

#[cfg(test)]
mod tests;
