use super::dto::{FlyToRequest, SearchHit, SearchRequest};
use crate::domain::dataset::entity::Position;
use crate::domain::layer::registry::LayerRegistry;
use crate::domain::layer::surface::CameraTarget;
use crate::domain::shared::errors::DomainError;
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

/// Text search over the labels of every registered layer.
pub struct SearchMarkersUseCase {
    registry: Arc<LayerRegistry>,
    zoom: u8,
    max_zoom: u8,
}

impl SearchMarkersUseCase {
    pub fn new(registry: Arc<LayerRegistry>, zoom: u8, max_zoom: u8) -> Self {
        Self {
            registry,
            zoom,
            max_zoom,
        }
    }

    /// Prefix matches come first, then substring matches, each in layer order.
    pub fn execute(&self, request: SearchRequest) -> Result<Vec<SearchHit>, DomainError> {
        let needle = request.query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(DomainError::ValidationError(
                "search query must not be empty".to_string(),
            ));
        }
        let limit = request.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut prefix = Vec::new();
        let mut contains = Vec::new();
        for (_, layer) in self.registry.snapshot() {
            for marker in layer.iter() {
                let label = marker.label.to_lowercase();
                let bucket = if label.starts_with(&needle) {
                    &mut prefix
                } else if label.contains(&needle) {
                    &mut contains
                } else {
                    continue;
                };
                bucket.push(SearchHit {
                    dataset: marker.dataset,
                    label: marker.label.clone(),
                    position: marker.position,
                    zoom: self.zoom,
                });
            }
        }

        prefix.append(&mut contains);
        prefix.truncate(limit);
        Ok(prefix)
    }

    /// Moves the map camera to a chosen location.
    pub fn fly_to(&self, request: FlyToRequest) -> Result<CameraTarget, DomainError> {
        let position = Position::new(request.latitude, request.longitude).ok_or_else(|| {
            DomainError::ValidationError("fly-to coordinates are out of range".to_string())
        })?;
        let zoom = request.zoom.unwrap_or(self.zoom).min(self.max_zoom);
        let target = CameraTarget { position, zoom };
        self.registry.surface().fly_to(target);
        Ok(target)
    }
}
