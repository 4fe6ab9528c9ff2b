//! User CRUD handlers.
//!
//! ```text
//! POST   /user       {"name":"Ann","email":"ann@x.com"}
//! GET    /user/{id}
//! PUT    /user/{id}  {"name":"Bee","email":"bee@x.com"}
//! DELETE /user/{id}
//! ```
//!
//! Path identifiers are parsed before the request body and before the
//! repository is touched. A value that is not a base-10 integer is rejected
//! with 400; an integer that can never name a record (zero or negative) is
//! answered with 404 directly.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft, UserId, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::INVALID_INPUT_MESSAGE;
use crate::inbound::http::state::HttpState;

/// Message returned when the path identifier is not an integer.
pub const INVALID_ID_MESSAGE: &str = "invalid user ID";
/// Message returned when no record matches the identifier.
pub const NOT_FOUND_MESSAGE: &str = "user not found";
/// Confirmation message returned by `DELETE /user/{id}`.
pub const DELETED_MESSAGE: &str = "User deleted";

/// Request body for `POST /user` and `PUT /user/{id}`.
///
/// `id` is accepted for compatibility but never trusted: creation assigns a
/// fresh identifier and updates use the path identifier. Keys match
/// case-insensitively (`Name`, `EMAIL`); missing or `null` fields decode as
/// empty and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserRequest {
    /// Ignored; the repository or the path decides the identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    #[serde(default)]
    #[schema(example = "Ann")]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    #[schema(example = "ann@x.com")]
    pub email: String,
}

impl TryFrom<Map<String, Value>> for UserRequest {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut request = Self::default();
        for (key, value) in fields {
            if value.is_null() {
                continue;
            }
            match key.to_lowercase().as_str() {
                "id" => request.id = Some(serde_json::from_value(value)?),
                "name" => request.name = serde_json::from_value(value)?,
                "email" => request.email = serde_json::from_value(value)?,
                _ => {}
            }
        }
        Ok(request)
    }
}

impl<'de> Deserialize<'de> for UserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Self::try_from(fields).map_err(D::Error::custom)
    }
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        Self::new(value.name, value.email)
    }
}

/// Response body for `DELETE /user/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    /// Human-readable confirmation.
    #[schema(example = "User deleted")]
    pub message: String,
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse().map_err(|err| match err {
        UserValidationError::NotAnInteger { .. } => Error::invalid_request(INVALID_ID_MESSAGE)
            .with_details(json!({ "field": "id", "value": raw })),
        UserValidationError::NonPositiveId { value } => {
            Error::not_found(NOT_FOUND_MESSAGE).with_details(json!({ "id": value }))
        }
    })
}

// `json_config` has already turned a decode failure into the domain error;
// recover it so it surfaces only after the path identifier is accepted.
fn decoded_body<T>(payload: Result<web::Json<T>, actix_web::Error>) -> Result<T, Error> {
    payload.map(web::Json::into_inner).map_err(|err| {
        err.as_error::<Error>().cloned().unwrap_or_else(|| {
            Error::invalid_request(INVALID_INPUT_MESSAGE)
                .with_details(json!({ "reason": err.to_string() }))
        })
    })
}

/// Create a user under the next repository identifier.
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = crate::inbound::http::schemas::UserSchema,
            headers(("Location" = String, description = "Path of the new record"))),
        (status = 400, description = "Malformed body", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create(payload.into_inner().into()).await?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/user/{}", user.id())))
        .json(user))
}

/// Fetch a user.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Invalid identifier", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Not found", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state.users.read(id).await?;
    Ok(web::Json(user))
}

/// Replace a user's name and email.
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Invalid identifier or body", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Not found", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Result<web::Json<UserRequest>, actix_web::Error>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.into_inner())?;
    let UserRequest { name, email, .. } = decoded_body(payload)?;
    let user = state.users.update(User::new(id, name, email)).await?;
    info!(user_id = %id, "user updated");
    Ok(web::Json(user))
}

/// Delete a user permanently.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "Invalid identifier", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Not found", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let id = parse_user_id(&path.into_inner())?;
    state.users.delete(id).await?;
    info!(user_id = %id, "user deleted");
    Ok(web::Json(DeleteUserResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}
