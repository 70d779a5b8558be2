use actix_web::{
    http::header::ContentType,
    web::{Bytes, Data},
    HttpResponse, Responder,
};

use crate::arena::snapshot::ArenaUpdate;
use crate::core::error::Result;
use crate::core::types::Action;
use crate::decision::engine::DecisionEngine;
use crate::server::AppState;

pub async fn ready(state: Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(state.readiness_message.clone())
}

pub async fn play(state: Data<AppState>, body: Bytes) -> HttpResponse {
    match decide_turn(&state.engine, &body) {
        Ok(action) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(action.code()),
        Err(err) => {
            tracing::warn!("Rejected arena update: {}", err);
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(err.to_string())
        }
    }
}

/// Decode, validate and decide for one turn notification
pub(crate) fn decide_turn(engine: &DecisionEngine, body: &[u8]) -> Result<Action> {
    let update = ArenaUpdate::from_json(body)?;
    tracing::debug!("IN: {:?}", update);

    let snapshot = update.snapshot()?;
    let me = update.self_href();
    snapshot.validate_within(me, engine.config().max_cells)?;

    Ok(engine.decide(&snapshot, me))
}
