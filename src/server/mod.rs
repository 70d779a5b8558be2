//! Thin HTTP adapter around the decision engine
//!
//! `GET /` answers readiness checks, `POST /` takes an arena update and
//! answers with a single action code. The bot's own identifier is read from
//! each update and never stored.

pub mod handlers;

use actix_web::web;

use crate::core::config::ServerConfig;
use crate::decision::engine::DecisionEngine;

/// Shared, read-only request state
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: DecisionEngine,
    pub readiness_message: String,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            engine: DecisionEngine::new(config.engine.clone()),
            readiness_message: config.readiness_message.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}

/// Register the bot routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::ready))
        .route("/", web::post().to(handlers::play));
}
