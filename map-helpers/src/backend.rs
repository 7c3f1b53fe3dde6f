//! Primitives of the mapping library the helpers delegate to.

use crate::geo::LatLng;
use crate::map::{Container, MapOptions};
use crate::marker::MarkerOptions;
use crate::tile_layer::TileLayerOptions;

/// Mapping library the helpers are built on.
///
/// Implementations own the map, marker and tile layer objects. The helpers
/// never look inside them, they only hand them back to the backend. Errors
/// returned by the backend reach the caller of the helpers unchanged.
#[async_trait::async_trait]
pub trait MapBackend: Send + Sync {
    /// Map handle.
    type Map: Send;
    /// Marker handle.
    type Marker: Send;
    /// Tile layer handle.
    type TileLayer: Send;
    /// Error of every backend operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a map bound to `container`.
    fn create_map(
        &self,
        container: &Container,
        options: &MapOptions,
    ) -> Result<Self::Map, Self::Error>;

    /// Creates a marker at `position`. The marker is not attached to any map.
    fn create_marker(
        &self,
        position: LatLng,
        options: &MarkerOptions,
    ) -> Result<Self::Marker, Self::Error>;

    /// Attaches `marker` to `map`.
    fn add_marker(&self, map: &mut Self::Map, marker: &Self::Marker) -> Result<(), Self::Error>;

    /// Creates a tile layer loading its tiles from `url_template`.
    async fn create_tile_layer(
        &self,
        url_template: &str,
        options: &TileLayerOptions,
    ) -> Result<Self::TileLayer, Self::Error>;

    /// Attaches `layer` to `map`.
    fn add_tile_layer(
        &self,
        map: &mut Self::Map,
        layer: &Self::TileLayer,
    ) -> Result<(), Self::Error>;

    /// Centers `map` at `center` with the given zoom level.
    fn set_view(&self, map: &mut Self::Map, center: LatLng, zoom: f64) -> Result<(), Self::Error>;
}
