//! Helper operations on top of a [`MapBackend`].

use crate::backend::MapBackend;
use crate::config::HelperConfig;
use crate::geo::LatLng;
use crate::icon::{Icon, IconOptions};
use crate::map::{Container, MapOptions};
use crate::marker::MarkerOptions;
use crate::tile_layer::TileLayerOptions;

/// Convenience operations for creating maps, icons, markers and tile layers.
///
/// All errors come straight from the backend.
///
/// ```
/// use map_helpers::{Container, LatLng, MapHelpers, MapOptions, MarkerOptions, MemoryBackend};
///
/// let helpers = MapHelpers::new(MemoryBackend::new());
/// let mut map = helpers.create_map(&Container::new("map"), &MapOptions::default())?;
/// helpers.create_marker(&mut map, LatLng::new(28.68, 115.89), MarkerOptions::default())?;
/// assert_eq!(map.markers().len(), 1);
/// # Ok::<(), map_helpers::MemoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapHelpers<B> {
    backend: B,
    config: HelperConfig,
}

impl<B: MapBackend> MapHelpers<B> {
    /// Creates helpers with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, HelperConfig::default())
    }

    /// Creates helpers with the given configuration.
    pub fn with_config(backend: B, config: HelperConfig) -> Self {
        Self { backend, config }
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current configuration.
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut HelperConfig {
        &mut self.config
    }

    /// Creates a map bound to `container`.
    ///
    /// Nothing is cached, every call gives a new map.
    pub fn create_map(
        &self,
        container: &Container,
        options: &MapOptions,
    ) -> Result<B::Map, B::Error> {
        self.backend.create_map(container, options)
    }

    /// Creates an icon: the built-in defaults, overridden by the configured
    /// icon options, overridden by `options`.
    pub fn create_icon(&self, options: IconOptions) -> Icon {
        let base = IconOptions::builtin().merged(self.config.icon.clone());
        Icon::new(base.merged(options))
    }

    /// Creates a marker at `position` and, unless disabled, attaches it to `map`.
    ///
    /// The default icon is given to markers without an icon when either the
    /// configuration or `options.auto_add_icon` asks for it. An icon set in
    /// `options` is always kept. The marker is attached when either the
    /// configuration or `options.auto_add_map` asks for it.
    pub fn create_marker(
        &self,
        map: &mut B::Map,
        position: LatLng,
        options: MarkerOptions,
    ) -> Result<B::Marker, B::Error> {
        let configured = self.config.marker.auto_add_map;
        let auto_add_map = configured || options.auto_add_map.unwrap_or(false);
        let marker = self.build_marker(position, options)?;

        if auto_add_map {
            self.backend.add_marker(map, &marker)?;
            log::debug!("Marker at {position:?} added to map");
        }

        Ok(marker)
    }

    /// Creates one marker per position without a map.
    ///
    /// There is no map to attach to, so the returned markers are never
    /// attached, whatever the configuration says. Use
    /// [`create_markers_on`](Self::create_markers_on) to place markers on a
    /// map.
    pub fn create_markers(
        &self,
        positions: impl IntoIterator<Item = LatLng>,
        options: &MarkerOptions,
    ) -> Result<Vec<B::Marker>, B::Error> {
        let markers = positions
            .into_iter()
            .map(|position| self.build_marker(position, options.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        if self.config.marker.auto_add_map || options.auto_add_map.unwrap_or(false) {
            log::warn!(
                "{} markers created without a map handle are left detached",
                markers.len()
            );
        }

        Ok(markers)
    }

    /// Creates one marker per position on `map`, same as calling
    /// [`create_marker`](Self::create_marker) for each of them.
    pub fn create_markers_on(
        &self,
        map: &mut B::Map,
        positions: impl IntoIterator<Item = LatLng>,
        options: &MarkerOptions,
    ) -> Result<Vec<B::Marker>, B::Error> {
        positions
            .into_iter()
            .map(|position| self.create_marker(map, position, options.clone()))
            .collect()
    }

    /// Creates a tile layer loading tiles from `url_template`, attaches it to
    /// `map` and resets the map view.
    ///
    /// With the default configuration the view is always set to
    /// (28.34, 115.56) at zoom 7, replacing whatever view the map had.
    pub async fn create_tile_layer(
        &self,
        map: &mut B::Map,
        url_template: &str,
        options: &TileLayerOptions,
    ) -> Result<B::TileLayer, B::Error> {
        let backend = &self.backend;
        let layer = backend.create_tile_layer(url_template, options).await?;
        backend.add_tile_layer(map, &layer)?;
        log::debug!("Tile layer {url_template} added to map");

        if let Some(view) = self.config.tile_layer.reset_view {
            backend.set_view(map, view.center, view.zoom)?;
            log::debug!("Map view reset to {:?} at zoom {}", view.center, view.zoom);
        }

        Ok(layer)
    }

    fn build_marker(
        &self,
        position: LatLng,
        mut options: MarkerOptions,
    ) -> Result<B::Marker, B::Error> {
        let configured = self.config.marker.auto_add_icon;
        let auto_add_icon = configured || options.auto_add_icon.unwrap_or(false);
        if auto_add_icon && options.icon.is_none() {
            options.icon = Some(self.create_icon(IconOptions::default()));
        }

        self.backend.create_marker(position, &options)
    }
}
