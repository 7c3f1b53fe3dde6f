//! Marker icon options and the built-in default icon.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// Image used for the default marker icon.
pub const DEFAULT_ICON_URL: &str = "marker-icon.png";
/// Shadow image used for the default marker icon.
pub const DEFAULT_SHADOW_URL: &str = "marker-shadow.png";
/// Size of the default marker icon in pixels.
pub const DEFAULT_ICON_SIZE: Point = Point::new(25.0, 41.0);
/// Point of the default marker icon that sits on the marker position.
pub const DEFAULT_ICON_ANCHOR: Point = Point::new(12.0, 41.0);

/// Visual parameters of a marker icon.
///
/// Every field is optional. When options are merged, each field that is set on
/// the overriding side replaces the field on the base side, and fields not
/// known to this struct are kept in [`IconOptions::extra`] and handed to the
/// backend as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconOptions {
    /// URL of the icon image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// URL of the high resolution icon image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_retina_url: Option<String>,
    /// Size of the icon image in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<Point>,
    /// Offset of the icon tip relative to its top left corner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_anchor: Option<Point>,
    /// Offset of popups relative to the icon anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup_anchor: Option<Point>,
    /// Offset of tooltips relative to the icon anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_anchor: Option<Point>,
    /// URL of the shadow image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_url: Option<String>,
    /// URL of the high resolution shadow image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_retina_url: Option<String>,
    /// Size of the shadow image in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_size: Option<Point>,
    /// Offset of the shadow tip relative to its top left corner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_anchor: Option<Point>,
    /// Class name assigned to the icon element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Options this struct does not know about. Passed through unvalidated.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl IconOptions {
    /// Options of the built-in default marker icon.
    pub fn builtin() -> Self {
        Self {
            icon_url: Some(DEFAULT_ICON_URL.to_owned()),
            shadow_url: Some(DEFAULT_SHADOW_URL.to_owned()),
            icon_size: Some(DEFAULT_ICON_SIZE),
            icon_anchor: Some(DEFAULT_ICON_ANCHOR),
            ..Default::default()
        }
    }

    /// Sets the icon image URL.
    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Sets the shadow image URL.
    pub fn with_shadow_url(mut self, url: impl Into<String>) -> Self {
        self.shadow_url = Some(url.into());
        self
    }

    /// Sets the icon size.
    pub fn with_icon_size(mut self, width: f64, height: f64) -> Self {
        self.icon_size = Some(Point::new(width, height));
        self
    }

    /// Sets the icon anchor.
    pub fn with_icon_anchor(mut self, x: f64, y: f64) -> Self {
        self.icon_anchor = Some(Point::new(x, y));
        self
    }

    /// Sets the class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
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

    /// Returns `self` with every option set in `overrides` replaced.
    pub fn merged(mut self, overrides: IconOptions) -> Self {
        let IconOptions {
            icon_url,
            icon_retina_url,
            icon_size,
            icon_anchor,
            popup_anchor,
            tooltip_anchor,
            shadow_url,
            shadow_retina_url,
            shadow_size,
            shadow_anchor,
            class_name,
            extra,
        } = overrides;

        self.icon_url = icon_url.or(self.icon_url);
        self.icon_retina_url = icon_retina_url.or(self.icon_retina_url);
        self.icon_size = icon_size.or(self.icon_size);
        self.icon_anchor = icon_anchor.or(self.icon_anchor);
        self.popup_anchor = popup_anchor.or(self.popup_anchor);
        self.tooltip_anchor = tooltip_anchor.or(self.tooltip_anchor);
        self.shadow_url = shadow_url.or(self.shadow_url);
        self.shadow_retina_url = shadow_retina_url.or(self.shadow_retina_url);
        self.shadow_size = shadow_size.or(self.shadow_size);
        self.shadow_anchor = shadow_anchor.or(self.shadow_anchor);
        self.class_name = class_name.or(self.class_name);
        self.extra.extend(extra);

        self
    }
}

/// Resolved icon configuration, ready to be given to a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon {
    options: IconOptions,
}

impl Icon {
    /// Creates an icon with exactly the given options, without applying defaults.
    pub fn new(options: IconOptions) -> Self {
        Self { options }
    }

    /// Options the icon was created with.
    pub fn options(&self) -> &IconOptions {
        &self.options
    }

    /// URL of the icon image, if set.
    pub fn icon_url(&self) -> Option<&str> {
        self.options.icon_url.as_deref()
    }

    /// URL of the shadow image, if set.
    pub fn shadow_url(&self) -> Option<&str> {
        self.options.shadow_url.as_deref()
    }

    /// Size of the icon, if set.
    pub fn icon_size(&self) -> Option<Point> {
        self.options.icon_size
    }

    /// Anchor of the icon, if set.
    pub fn icon_anchor(&self) -> Option<Point> {
        self.options.icon_anchor
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::new(IconOptions::builtin())
    }
}

/// Creates an icon from the built-in defaults overridden by `options`.
///
/// ```
/// use map_helpers::{create_icon, IconOptions};
///
/// let icon = create_icon(IconOptions::default().with_icon_size(10.0, 10.0));
/// assert_eq!(icon.icon_url(), Some("marker-icon.png"));
/// ```
pub fn create_icon(options: IconOptions) -> Icon {
    Icon::new(IconOptions::builtin().merged(options))
}
