//! In-process implementation of the mapping primitives.
//!
//! [`MemoryBackend`] keeps maps, markers and tile layers as plain Rust values
//! and draws nothing. Every piece of state the helpers change (the view, the
//! attached markers and layers) can be read back, which makes it suitable for
//! headless use and for tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::backend::MapBackend;
use crate::error::TemplateError;
use crate::geo::LatLng;
use crate::icon::Icon;
use crate::map::{Container, MapOptions};
use crate::marker::MarkerOptions;
use crate::tile_layer::{TileIndex, TileLayerOptions, UrlTemplate};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Error of the in-process backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MemoryError {
    /// Container does not identify any element.
    #[error("map container not found: {0:?}")]
    ContainerNotFound(String),

    /// Coordinate is not a pair of finite numbers.
    #[error("invalid LatLng object: ({}, {})", .0.lat, .0.lng)]
    InvalidLatLng(LatLng),

    /// Marker is already attached to another map.
    #[error("marker {marker} is already attached to map {map}")]
    MarkerAttached {
        /// Marker id.
        marker: u64,
        /// Id of the map the marker is attached to.
        map: u64,
    },

    /// Tile layer is already attached to another map.
    #[error("tile layer {layer} is already attached to map {map}")]
    LayerAttached {
        /// Layer id.
        layer: u64,
        /// Id of the map the layer is attached to.
        map: u64,
    },

    /// Tile URL template could not be parsed.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

fn check_latlng(position: LatLng) -> Result<LatLng, MemoryError> {
    if position.is_finite() {
        Ok(position)
    } else {
        Err(MemoryError::InvalidLatLng(position))
    }
}

/// Backend keeping all objects in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBackend;

impl MemoryBackend {
    /// Creates a new backend.
    pub fn new() -> Self {
        Self
    }
}

/// Map created by [`MemoryBackend`].
#[derive(Debug)]
pub struct MemoryMap {
    id: u64,
    container: Container,
    options: MapOptions,
    view: Option<(LatLng, f64)>,
    markers: Vec<MemoryMarker>,
    tile_layers: Vec<MemoryTileLayer>,
}

impl MemoryMap {
    /// Unique id of the map.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Container the map is bound to.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Options the map was created with.
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Current center, if a view was set.
    pub fn center(&self) -> Option<LatLng> {
        self.view.map(|(center, _)| center)
    }

    /// Current zoom level, if a view was set.
    pub fn zoom(&self) -> Option<f64> {
        self.view.map(|(_, zoom)| zoom)
    }

    /// Markers attached to the map, in the order they were added.
    pub fn markers(&self) -> &[MemoryMarker] {
        &self.markers
    }

    /// Tile layers attached to the map, in the order they were added.
    pub fn tile_layers(&self) -> &[MemoryTileLayer] {
        &self.tile_layers
    }

    /// Returns true if `marker` is attached to this map.
    pub fn has_marker(&self, marker: &MemoryMarker) -> bool {
        self.markers.iter().any(|m| m.id() == marker.id())
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        let zoom = self.options.limit_zoom(zoom);
        log::trace!("Map {} view set to {center:?} at zoom {zoom}", self.id);
        self.view = Some((center, zoom));
    }
}

#[derive(Debug)]
struct MarkerState {
    position: LatLng,
    map_id: Option<u64>,
}

#[derive(Debug)]
struct MarkerInner {
    id: u64,
    options: MarkerOptions,
    state: RwLock<MarkerState>,
}

/// Marker created by [`MemoryBackend`].
///
/// Cloning gives another handle to the same marker; the clone kept by the map
/// and the one returned to the caller observe the same position.
#[derive(Debug, Clone)]
pub struct MemoryMarker {
    inner: Arc<MarkerInner>,
}

impl MemoryMarker {
    /// Unique id of the marker.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Current position.
    pub fn position(&self) -> LatLng {
        self.inner.state.read().position
    }

    /// Moves the marker.
    pub fn set_position(&self, position: LatLng) -> Result<(), MemoryError> {
        self.inner.state.write().position = check_latlng(position)?;
        Ok(())
    }

    /// Options the marker was created with.
    pub fn options(&self) -> &MarkerOptions {
        &self.inner.options
    }

    /// Icon of the marker, if it has one.
    pub fn icon(&self) -> Option<&Icon> {
        self.inner.options.icon.as_ref()
    }

    /// Id of the map the marker is attached to.
    pub fn map_id(&self) -> Option<u64> {
        self.inner.state.read().map_id
    }

    /// Returns true if the marker is attached to a map.
    pub fn is_attached(&self) -> bool {
        self.map_id().is_some()
    }
}

#[derive(Debug)]
struct TileLayerInner {
    id: u64,
    template: UrlTemplate,
    options: TileLayerOptions,
    map_id: RwLock<Option<u64>>,
}

/// Tile layer created by [`MemoryBackend`].
#[derive(Debug, Clone)]
pub struct MemoryTileLayer {
    inner: Arc<TileLayerInner>,
}

impl MemoryTileLayer {
    /// Unique id of the layer.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// URL template of the layer.
    pub fn template(&self) -> &UrlTemplate {
        &self.inner.template
    }

    /// Options the layer was created with.
    pub fn options(&self) -> &TileLayerOptions {
        &self.inner.options
    }

    /// Id of the map the layer is attached to.
    pub fn map_id(&self) -> Option<u64> {
        *self.inner.map_id.read()
    }

    /// URL of the tile at `index`.
    pub fn tile_url(&self, index: TileIndex) -> Result<String, MemoryError> {
        Ok(self.inner.template.tile_url(index, &self.inner.options)?)
    }
}

#[async_trait::async_trait]
impl MapBackend for MemoryBackend {
    type Map = MemoryMap;
    type Marker = MemoryMarker;
    type TileLayer = MemoryTileLayer;
    type Error = MemoryError;

    fn create_map(
        &self,
        container: &Container,
        options: &MapOptions,
    ) -> Result<MemoryMap, MemoryError> {
        if container.id().trim().is_empty() {
            return Err(MemoryError::ContainerNotFound(container.id().to_owned()));
        }

        let mut map = MemoryMap {
            id: next_id(),
            container: container.clone(),
            options: options.clone(),
            view: None,
            markers: Vec::new(),
            tile_layers: Vec::new(),
        };

        if let (Some(center), Some(zoom)) = (options.center, options.zoom) {
            map.set_view(check_latlng(center)?, zoom);
        }

        log::debug!("Created map {} in container {container}", map.id);
        Ok(map)
    }

    fn create_marker(
        &self,
        position: LatLng,
        options: &MarkerOptions,
    ) -> Result<MemoryMarker, MemoryError> {
        let position = check_latlng(position)?;
        Ok(MemoryMarker {
            inner: Arc::new(MarkerInner {
                id: next_id(),
                options: options.clone(),
                state: RwLock::new(MarkerState {
                    position,
                    map_id: None,
                }),
            }),
        })
    }

    fn add_marker(&self, map: &mut MemoryMap, marker: &MemoryMarker) -> Result<(), MemoryError> {
        let mut state = marker.inner.state.write();
        match state.map_id {
            Some(id) if id == map.id => return Ok(()),
            Some(id) => {
                return Err(MemoryError::MarkerAttached {
                    marker: marker.id(),
                    map: id,
                })
            }
            None => {}
        }

        state.map_id = Some(map.id);
        map.markers.push(marker.clone());
        log::trace!("Marker {} added to map {}", marker.id(), map.id);

        Ok(())
    }

    async fn create_tile_layer(
        &self,
        url_template: &str,
        options: &TileLayerOptions,
    ) -> Result<MemoryTileLayer, MemoryError> {
        let template = UrlTemplate::parse(url_template)?;
        Ok(MemoryTileLayer {
            inner: Arc::new(TileLayerInner {
                id: next_id(),
                template,
                options: options.clone(),
                map_id: RwLock::new(None),
            }),
        })
    }

    fn add_tile_layer(
        &self,
        map: &mut MemoryMap,
        layer: &MemoryTileLayer,
    ) -> Result<(), MemoryError> {
        let mut map_id = layer.inner.map_id.write();
        match *map_id {
            Some(id) if id == map.id => return Ok(()),
            Some(id) => {
                return Err(MemoryError::LayerAttached {
                    layer: layer.id(),
                    map: id,
                })
            }
            None => {}
        }

        *map_id = Some(map.id);
        map.tile_layers.push(layer.clone());
        log::trace!("Tile layer {} added to map {}", layer.id(), map.id);

        Ok(())
    }

    fn set_view(&self, map: &mut MemoryMap, center: LatLng, zoom: f64) -> Result<(), MemoryError> {
        map.set_view(check_latlng(center)?, zoom);
        Ok(())
    }
}
