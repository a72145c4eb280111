//! SessionHub server entrypoint
//!
//! Initialization and middleware wiring live in dedicated modules so this
//! file remains a thin orchestrator.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Result;
use log::info;
use sessionhub_api::routes;
use sessionhub_auth::{AccessGate, CredentialService, StoreUserRepository};
use sessionhub_core::{SessionService, StoreSessionRepository};
use sessionhub_server::{config::ServerConfig, logging, middleware};
use sessionhub_store::{MemoryBackend, StorageBackend};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fallback to defaults when config file missing)
    let config_path = "config.toml";
    let config = match ServerConfig::load_or_default(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("FATAL: Failed to load {}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    // Logging before any other side effects
    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("SessionHub Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Host: {}  Port: {}", config.server.host, config.server.port);

    // Store handle, acquired once at process start and injected everywhere
    let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());

    let credentials = Arc::new(CredentialService::new(
        Arc::new(StoreUserRepository::new(backend.clone())),
        config.auth.clone(),
    ));
    let gate = AccessGate::new(credentials.clone());
    let sessions = Arc::new(SessionService::new(Arc::new(StoreSessionRepository::new(
        backend,
    ))));

    let bind_addr = (config.server.host.clone(), config.server.port);
    let workers = config.server.workers;
    let app_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::build_cors_from_config(&app_config))
            .wrap(Logger::default())
            .app_data(web::Data::new(credentials.clone()))
            .app_data(web::Data::new(gate.clone()))
            .app_data(web::Data::new(sessions.clone()))
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind(bind_addr)?
    .run();

    info!("SessionHub server started");
    server.await?;
    info!("SessionHub server stopped");

    Ok(())
}
