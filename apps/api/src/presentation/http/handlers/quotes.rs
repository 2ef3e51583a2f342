use crate::{
    domain::quotes::entity::{QuoteOfTheMoment, quote_at},
    presentation::http::state::AppState,
};
use axum::{Json, extract::State};
use chrono::Utc;

pub async fn current_quote(State(state): State<AppState>) -> Json<QuoteOfTheMoment> {
    Json(quote_at(
        Utc::now().timestamp(),
        state.config.quote_rotation_seconds,
    ))
}
