use crate::{
    application::load_dataset::dto::LayerSummary,
    domain::marker::entity::ICON_SIZE,
    infrastructure::map::published_surface::SurfaceView,
    presentation::http::{handlers::layers::layer_summaries, state::AppState},
};
use axum::{Json, extract::State};
use serde::Serialize;
use ts_rs::TS;

/// Start and end points offered by the routing control before the user picks any.
pub const DEFAULT_WAYPOINTS: [[f64; 2]; 2] = [[1.3521, 103.8198], [1.2956, 103.8590]];

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct MapConfigResponse {
    pub center: [f64; 2],
    pub initial_zoom: u8,
    pub max_zoom: u8,
    pub search_zoom: u8,
    pub tiles: TileLayer,
    pub routing_waypoints: Vec<[f64; 2]>,
    pub icon_size: [u32; 2],
    pub layers: Vec<LayerSummary>,
}

pub async fn map_config(State(state): State<AppState>) -> Json<MapConfigResponse> {
    let map = &state.config.map;
    Json(MapConfigResponse {
        center: [map.center_lat, map.center_lng],
        initial_zoom: map.initial_zoom,
        max_zoom: map.max_zoom,
        search_zoom: map.search_zoom,
        tiles: TileLayer {
            url: map.tile_url.clone(),
            attribution: map.tile_attribution.clone(),
            max_zoom: map.max_zoom,
        },
        routing_waypoints: DEFAULT_WAYPOINTS.to_vec(),
        icon_size: ICON_SIZE,
        layers: layer_summaries(&state),
    })
}

pub async fn map_view(State(state): State<AppState>) -> Json<SurfaceView> {
    Json(state.surface.view())
}
