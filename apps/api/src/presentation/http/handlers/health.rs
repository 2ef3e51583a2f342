use crate::domain::dataset::entity::DatasetKind;
use crate::presentation::http::state::AppState;
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Serialize)]
pub struct LayerHealth {
    dataset: DatasetKind,
    /// `None` until the first successful load.
    markers: Option<usize>,
    loading: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    layers: Vec<LayerHealth>,
}

/// Liveness plus layer state. A dataset that failed to load does not make the
/// service unhealthy; the other layers keep working.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let layers = DatasetKind::ALL
        .into_iter()
        .map(|dataset| LayerHealth {
            dataset,
            markers: state.registry.get(dataset).map(|layer| layer.len()),
            loading: state.loader.is_loading(dataset),
        })
        .collect();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        layers,
    })
}
