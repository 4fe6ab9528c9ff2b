//! Domain primitives, errors, and ports.
//!
//! Nothing in here depends on the HTTP framework. Inbound adapters translate
//! requests into calls on [`ports::UserRepository`] and map [`Error`] back
//! onto their own protocol.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft, UserId, UserValidationError};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
