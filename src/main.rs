//! Arena Brawler - HTTP entry point
//!
//! Serves the bot on `0.0.0.0:$PORT` (8080 by default). An optional TOML
//! config path may be passed as the first argument.

use actix_web::{middleware, web, App, HttpServer};
use arena_brawler::core::config::ServerConfig;
use arena_brawler::server::{configure, AppState};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arena_brawler=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ServerConfig::load(&path) {
            Ok(config) => config.with_env_overrides(),
            Err(e) => {
                tracing::error!("Failed to load config {}: {}", path, e);
                return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
            }
        },
        None => ServerConfig::from_env(),
    };

    let bind_addr = config.bind_addr();
    let state = AppState::from_config(&config);
    let engine_config = state.engine.config();
    tracing::info!(
        "Arena Brawler starting on {} (scan_radius={} max_cells={})",
        bind_addr,
        engine_config.scan_radius,
        engine_config.max_cells
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
