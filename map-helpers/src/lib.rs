//! Helpers for the common chores of putting a map on screen: creating the
//! map, giving markers the default icon, placing markers and adding a tile
//! layer with a default view.
//!
//! The helpers are written against the [`MapBackend`] trait, which provides
//! the actual map, marker and tile layer objects. [`MemoryBackend`] is an
//! in-process implementation that keeps all state inspectable.
//!
//! ```no_run
//! use map_helpers::{Container, MapHelpers, MapOptions, MemoryBackend, TileLayerOptions};
//!
//! # async fn run() -> Result<(), map_helpers::MemoryError> {
//! let helpers = MapHelpers::new(MemoryBackend::new());
//! let mut map = helpers.create_map(&Container::new("map"), &MapOptions::default())?;
//! helpers
//!     .create_tile_layer(
//!         &mut map,
//!         "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
//!         &TileLayerOptions::default(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod geo;
pub mod helpers;
pub mod icon;
pub mod map;
pub mod marker;
pub mod memory;
pub mod tile_layer;

pub use backend::MapBackend;
pub use config::{HelperConfig, MarkerDefaults, TileLayerDefaults, ViewReset};
pub use error::{ConfigError, TemplateError};
pub use geo::{LatLng, Point};
pub use helpers::MapHelpers;
pub use icon::{create_icon, Icon, IconOptions};
pub use map::{Container, MapOptions};
pub use marker::MarkerOptions;
pub use memory::{MemoryBackend, MemoryError, MemoryMap, MemoryMarker, MemoryTileLayer};
pub use tile_layer::{Subdomains, TileIndex, TileLayerOptions, UrlTemplate};
