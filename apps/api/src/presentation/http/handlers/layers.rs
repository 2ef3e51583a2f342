use crate::{
    application::load_dataset::dto::{DatasetOutcome, LayerSummary, LoadReport},
    domain::{
        dataset::{entity::DatasetKind, profile::DatasetProfile},
        marker::entity::MapMarker,
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct LayerDetail {
    pub dataset: DatasetKind,
    pub label: String,
    pub visible: bool,
    pub loading: bool,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct VisibilityRequest {
    pub visible: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct VisibilityResponse {
    pub dataset: DatasetKind,
    pub visible: bool,
}

pub(crate) fn layer_summaries(state: &AppState) -> Vec<LayerSummary> {
    DatasetKind::ALL
        .into_iter()
        .map(|dataset| LayerSummary {
            dataset,
            label: dataset.label().to_string(),
            icon_url: DatasetProfile::for_kind(dataset).icon_url.to_string(),
            markers: state.registry.get(dataset).map(|layer| layer.len()),
        })
        .collect()
}

pub async fn list_layers(State(state): State<AppState>) -> Json<Vec<LayerSummary>> {
    Json(layer_summaries(&state))
}

pub async fn get_layer(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
) -> Result<Json<LayerDetail>, AppError> {
    let dataset: DatasetKind = dataset.parse()?;
    let markers = state
        .registry
        .get(dataset)
        .ok_or_else(|| AppError::NotFound(format!("{} have not been loaded", dataset.label())))?;

    Ok(Json(LayerDetail {
        dataset,
        label: dataset.label().to_string(),
        visible: state.surface.is_displayed(dataset),
        loading: state.loader.is_loading(dataset),
        markers: markers.to_vec(),
    }))
}

/// Layer toggle. Showing re-displays the registered marker set; hiding only removes it
/// from the map, the registry keeps it.
pub async fn set_visibility(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Json(payload): Json<VisibilityRequest>,
) -> Result<Json<VisibilityResponse>, AppError> {
    let dataset: DatasetKind = dataset.parse()?;

    if payload.visible {
        state.registry.show(dataset).ok_or_else(|| {
            AppError::NotFound(format!("{} have not been loaded", dataset.label()))
        })?;
    } else {
        state.registry.hide(dataset);
    }

    Ok(Json(VisibilityResponse {
        dataset,
        visible: state.surface.is_displayed(dataset),
    }))
}

pub async fn reload_layer(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
) -> Result<Json<DatasetOutcome>, AppError> {
    let dataset: DatasetKind = dataset.parse()?;
    let outcome = state.loader.load_and_register(dataset).await?;
    Ok(Json(outcome))
}

pub async fn reload_all(State(state): State<AppState>) -> Json<LoadReport> {
    Json(state.loader.load_all().await)
}
