//! Marker options.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::icon::Icon;

/// Options a marker is created with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerOptions {
    /// Icon of the marker. When unset and icon injection is enabled, the
    /// default icon is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Requests injection of the default icon for this marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_add_icon: Option<bool>,
    /// Requests attaching this marker to the map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_add_map: Option<bool>,
    /// Hover text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Alternative text of the icon image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Opacity in `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Whether the marker can be dragged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    /// Offset added to the marker z-index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index_offset: Option<i32>,
    /// Options this struct does not know about. Passed through unvalidated.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MarkerOptions {
    /// Sets the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the per-marker icon injection flag.
    pub fn with_auto_add_icon(mut self, value: bool) -> Self {
        self.auto_add_icon = Some(value);
        self
    }

    /// Sets the per-marker attach flag.
    pub fn with_auto_add_map(mut self, value: bool) -> Self {
        self.auto_add_map = Some(value);
        self
    }

    /// Sets the hover text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Adds an option this struct has no field for.
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
