//! In-memory user CRUD service.
//!
//! Layout follows ports and adapters: `domain` owns the user model, the
//! error envelope and the repository port; `outbound` provides the
//! mutex-guarded store; `inbound::http` exposes it over Actix.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
