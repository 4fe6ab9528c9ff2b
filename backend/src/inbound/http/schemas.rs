//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. These wrappers mirror their wire
//! shape and live in the inbound layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed identifier or request body.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The identifier does not name a stored record.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected failure outside the repository contract.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "user not found")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary structured context.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Repository-assigned identifier.
    #[schema(minimum = 1, example = 1)]
    id: u64,
    /// Display name.
    #[schema(example = "Ann")]
    name: String,
    /// Contact email.
    #[schema(example = "ann@x.com")]
    email: String,
}
