use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    application::search_markers::{
        dto::{FlyToRequest, SearchHit, SearchRequest},
        use_case::SearchMarkersUseCase,
    },
    domain::layer::surface::CameraTarget,
    presentation::http::{errors::AppError, state::AppState},
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

fn use_case(state: &AppState) -> SearchMarkersUseCase {
    SearchMarkersUseCase::new(
        state.registry.clone(),
        state.config.map.search_zoom,
        state.config.map.max_zoom,
    )
}

pub async fn search_markers(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<SearchHit>>, AppError> {
    let hits = use_case(&state).execute(SearchRequest {
        query: params.q,
        limit: params.limit,
    })?;
    Ok(Json(hits))
}

pub async fn fly_to(
    State(state): State<AppState>,
    Json(payload): Json<FlyToRequest>,
) -> Result<Json<CameraTarget>, AppError> {
    Ok(Json(use_case(&state).fly_to(payload)?))
}
