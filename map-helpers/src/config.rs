//! Module level defaults of the helpers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::LatLng;
use crate::icon::IconOptions;

/// Center the view is reset to after a tile layer is added.
pub const DEFAULT_RESET_CENTER: LatLng = LatLng::new(28.34, 115.56);
/// Zoom level the view is reset to after a tile layer is added.
pub const DEFAULT_RESET_ZOOM: f64 = 7.0;

/// Defaults used by [`MapHelpers`](crate::MapHelpers).
///
/// Can be loaded from JSON:
///
/// ```json
/// {
///   "icon": { "iconUrl": "/assets/pin.png" },
///   "marker": { "autoAddIcon": true, "autoAddMap": false },
///   "tileLayer": { "resetView": null }
/// }
/// ```
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HelperConfig {
    /// Icon options applied on top of the built-in default icon.
    pub icon: IconOptions,
    /// Marker defaults.
    pub marker: MarkerDefaults,
    /// Tile layer defaults.
    pub tile_layer: TileLayerDefaults,
}

impl HelperConfig {
    /// Parses the configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading helper configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the configuration to pretty printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Behavior of marker creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerDefaults {
    /// Give markers without an icon the default icon.
    pub auto_add_icon: bool,
    /// Attach created markers to the map.
    pub auto_add_map: bool,
}

impl Default for MarkerDefaults {
    fn default() -> Self {
        Self {
            auto_add_icon: true,
            auto_add_map: true,
        }
    }
}

/// Behavior of tile layer creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileLayerDefaults {
    /// View the map is set to after a tile layer is attached. `None` leaves
    /// the view alone.
    pub reset_view: Option<ViewReset>,
}

impl Default for TileLayerDefaults {
    fn default() -> Self {
        Self {
            reset_view: Some(ViewReset::default()),
        }
    }
}

/// Center and zoom level of a map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewReset {
    /// Center.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: f64,
}

impl Default for ViewReset {
    fn default() -> Self {
        Self {
            center: DEFAULT_RESET_CENTER,
            zoom: DEFAULT_RESET_ZOOM,
        }
    }
}
