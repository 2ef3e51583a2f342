use super::surface::MapSurface;
use crate::domain::dataset::entity::DatasetKind;
use crate::domain::marker::entity::MapMarker;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide owner of the marker set currently displayed for each dataset.
///
/// Entries are swapped wholesale, so a reader sees either the previous complete set or
/// the new complete set. Every layer change on the map surface goes through the registry and
/// happens while the `layers` lock is held, so the surface never shows a set older than
/// the registered one.
pub struct LayerRegistry {
    layers: RwLock<BTreeMap<DatasetKind, Arc<[MapMarker]>>>,
    surface: Arc<dyn MapSurface>,
}

impl LayerRegistry {
    pub fn new(surface: Arc<dyn MapSurface>) -> Self {
        Self {
            layers: RwLock::new(BTreeMap::new()),
            surface,
        }
    }

    /// Replaces the entry for `dataset` and shows the new set on the map surface.
    pub fn register(&self, dataset: DatasetKind, markers: Vec<MapMarker>) -> Arc<[MapMarker]> {
        let layer: Arc<[MapMarker]> = markers.into();
        let mut layers = self.layers.write().unwrap_or_else(PoisonError::into_inner);
        layers.insert(dataset, Arc::clone(&layer));
        self.surface.show_layer(dataset, Arc::clone(&layer));
        drop(layers);

        tracing::debug!(dataset = %dataset, markers = layer.len(), "layer registered");
        layer
    }

    /// Re-displays the registered set for `dataset`. `None` when nothing is registered.
    pub fn show(&self, dataset: DatasetKind) -> Option<Arc<[MapMarker]>> {
        let layers = self.layers.read().unwrap_or_else(PoisonError::into_inner);
        let markers = layers.get(&dataset).cloned()?;
        self.surface.show_layer(dataset, Arc::clone(&markers));
        Some(markers)
    }

    pub fn hide(&self, dataset: DatasetKind) {
        let _layers = self.layers.read().unwrap_or_else(PoisonError::into_inner);
        self.surface.remove_layer(dataset);
    }

    pub fn get(&self, dataset: DatasetKind) -> Option<Arc<[MapMarker]>> {
        self.layers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&dataset)
            .cloned()
    }

    /// All registered layers in dataset order.
    pub fn snapshot(&self) -> Vec<(DatasetKind, Arc<[MapMarker]>)> {
        self.layers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(dataset, markers)| (*dataset, Arc::clone(markers)))
            .collect()
    }

    pub fn surface(&self) -> &Arc<dyn MapSurface> {
        &self.surface
    }
}
