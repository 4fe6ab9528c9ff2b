//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every user and health endpoint plus the schema
//! wrappers from [`crate::inbound::http::schemas`], so domain types stay free
//! of utoipa derives. The document backs Swagger UI in debug builds and is
//! exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::{DeleteUserResponse, UserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "CRUD access to in-memory user records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        UserRequest,
        DeleteUserResponse
    )),
    tags(
        (name = "users", description = "Create, read, update, and delete users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
