//! Map container and map options.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// Rendering target a map is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Container {
    id: String,
    size: Option<(u32, u32)>,
}

impl Container {
    /// Container identified by the given element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: None,
        }
    }

    /// Sets the pixel size of the container.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Element id of the container.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pixel size of the container, if known.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

impl From<&str> for Container {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Options a map is created with.
///
/// The initial view is only set when both `center` and `zoom` are given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapOptions {
    /// Initial center.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    /// Initial zoom level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    /// Lowest zoom level the map can be set to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    /// Highest zoom level the map can be set to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    /// Whether the map can be dragged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragging: Option<bool>,
    /// Whether the map zooms with the mouse wheel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_wheel_zoom: Option<bool>,
    /// Whether the map zooms on double click.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_click_zoom: Option<bool>,
    /// Whether keyboard navigation is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<bool>,
    /// Whether the zoom control is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_control: Option<bool>,
    /// Whether the attribution control is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_control: Option<bool>,
    /// Options this struct does not know about. Passed through unvalidated.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MapOptions {
    /// Sets the initial view.
    pub fn with_view(mut self, center: impl Into<LatLng>, zoom: f64) -> Self {
        self.center = Some(center.into());
        self.zoom = Some(zoom);
        self
    }

    /// Sets the zoom bounds.
    pub fn with_zoom_bounds(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = Some(min_zoom);
        self.max_zoom = Some(max_zoom);
        self
    }

    /// Enables or disables dragging.
    pub fn with_dragging(mut self, value: bool) -> Self {
        self.dragging = Some(value);
        self
    }

    /// Enables or disables the zoom control.
    pub fn with_zoom_control(mut self, value: bool) -> Self {
        self.zoom_control = Some(value);
        self
    }

    /// Clamps `zoom` into the configured zoom bounds.
    pub fn limit_zoom(&self, zoom: f64) -> f64 {
        let zoom = match self.max_zoom {
            Some(max) if zoom > max => max,
            _ => zoom,
        };
        match self.min_zoom {
            Some(min) if zoom < min => min,
            _ => zoom,
        }
    }
}
