use crate::{domain::notice::entity::Notice, presentation::http::state::AppState};
use axum::{Json, extract::State};

pub async fn list_notices(State(state): State<AppState>) -> Json<Vec<Notice>> {
    Json(state.notices.recent())
}
