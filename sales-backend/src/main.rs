use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod calendar;
mod config;
mod controllers;
mod dashboard;
mod error;
mod models;
mod store;
mod views;

use config::Config;
use store::{seed, CrmData, CrmStore, SessionRegistry};

pub struct AppState {
    pub store: Arc<CrmStore>,
    pub sessions: Arc<SessionRegistry>,
    pub config: Config,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let data = if config.seed_demo_data {
            seed::demo_data()
        } else {
            CrmData::default()
        };
        log::info!(
            "[STORE] Loaded {} users, {} followups, {} schedules",
            data.users.len(),
            data.followups.len(),
            data.schedules.len()
        );

        Self {
            store: Arc::new(CrmStore::new(data)),
            sessions: Arc::new(SessionRegistry::new(config.session_ttl())),
            config,
            started_at: std::time::Instant::now(),
        }
    }
}

fn build_cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allow_any_method().allow_any_header().max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;
    let bind_address = config.bind_address.clone();

    log::info!(
        "Starting sales-backend v{} on {}:{}",
        controllers::health::VERSION,
        bind_address,
        port
    );
    log::info!(
        "Session TTL: {}h, demo data: {}, CORS origin: {}",
        config.session_ttl_hours,
        config.seed_demo_data,
        config.cors_allowed_origin.as_deref().unwrap_or("any")
    );

    let state = web::Data::new(AppState::new(config));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(build_cors(state.config.cors_allowed_origin.as_deref()))
            .configure(controllers::extractor_config)
            .configure(controllers::health::config_routes)
            .configure(controllers::auth::config)
            .configure(controllers::followups::config)
            .configure(controllers::schedules::config)
            .configure(controllers::calendar::config)
            .configure(controllers::dashboard::config)
    })
    .bind((bind_address.as_str(), port))?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        // Stop the HTTP server with timeout
        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
