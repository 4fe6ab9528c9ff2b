//! HTTP adapter mapping for domain errors.
//!
//! The domain [`Error`] stays framework-agnostic; this module teaches Actix
//! how to render it and routes extractor failures through the same envelope.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned for any request body that fails to decode.
pub const INVALID_INPUT_MESSAGE: &str = "invalid input";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if !matches!(error.code(), ErrorCode::InternalError) {
        return error.clone();
    }
    let redacted = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// JSON extractor configuration rendering decode failures as `invalid input`.
///
/// Register it with `App::app_data` so malformed bodies and wrong field
/// types produce the standard error envelope instead of Actix's plain-text
/// default. The `Content-Type` header is not checked: a well-formed JSON
/// body decodes whatever the client labelled it.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::error::json_config;
///
/// let app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "rejected request body");
    Error::invalid_request(INVALID_INPUT_MESSAGE)
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}
