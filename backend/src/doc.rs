//! OpenAPI document for the HTTP interface.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User};
use crate::inbound::http::users::{CreateUserRequest, UsersResponse};

/// OpenAPI document covering the user routes and health probes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "List and register users, plus orchestration probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UsersResponse, CreateUserRequest, Error, ErrorCode)),
    tags(
        (name = "users", description = "User directory operations"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
