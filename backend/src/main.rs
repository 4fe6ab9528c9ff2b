//! Service entry-point: loads listener settings, wires the in-memory
//! repository into the HTTP server, and runs until shutdown.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::InMemoryUserRepository;
use user_service::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let users = Arc::new(InMemoryUserRepository::new());
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, users))?;

    info!(%bind_addr, "user service listening");
    server.await
}
