//! Tile layer options and tile URL templates.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Subdomains used for `{s}` when the layer options give none.
pub const DEFAULT_SUBDOMAINS: &str = "abc";

/// Template key of the inverted y coordinate. Renamed during parsing since
/// `strfmt` keys cannot start with a sign.
const INVERTED_Y_KEY: &str = "-y";
const INVERTED_Y_VAR: &str = "inverted_y";

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        let pattern = r"\{ *([\w-]+) *\}";
        Regex::new(pattern).expect("placeholder regex is valid")
    })
}

fn key_to_var(key: &str) -> &str {
    match key {
        INVERTED_Y_KEY => INVERTED_Y_VAR,
        var => var,
    }
}

fn var_to_key(var: &str) -> &str {
    match var {
        INVERTED_Y_VAR => INVERTED_Y_KEY,
        key => key,
    }
}

/// Index of a tile in the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Zoom level.
    pub z: u32,
    /// Column.
    pub x: i32,
    /// Row, counted from the top.
    pub y: i32,
}

impl TileIndex {
    /// Creates a new tile index.
    pub const fn new(z: u32, x: i32, y: i32) -> Self {
        Self { z, x, y }
    }
}

/// Subdomains a tile layer spreads its requests over.
///
/// Accepts both forms tile services are configured with: a string where every
/// character is one subdomain (`"abc"`), or a list of names
/// (`["otile1", "otile2"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subdomains {
    /// Every character is one subdomain.
    Chars(String),
    /// Every entry is one subdomain.
    List(Vec<String>),
}

impl Subdomains {
    /// Number of subdomains.
    pub fn len(&self) -> usize {
        match self {
            Self::Chars(chars) => chars.chars().count(),
            Self::List(list) => list.len(),
        }
    }

    /// Returns true if there are no subdomains.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subdomain at `position`.
    pub fn get(&self, position: usize) -> Option<String> {
        match self {
            Self::Chars(chars) => chars.chars().nth(position).map(String::from),
            Self::List(list) => list.get(position).cloned(),
        }
    }
}

impl Default for Subdomains {
    fn default() -> Self {
        Self::Chars(DEFAULT_SUBDOMAINS.to_owned())
    }
}

impl From<&str> for Subdomains {
    fn from(chars: &str) -> Self {
        Self::Chars(chars.to_owned())
    }
}

impl From<String> for Subdomains {
    fn from(chars: String) -> Self {
        Self::Chars(chars)
    }
}

impl From<Vec<String>> for Subdomains {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

/// Options a tile layer is created with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileLayerOptions {
    /// Lowest zoom level the layer shows tiles for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    /// Highest zoom level the layer shows tiles for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    /// Subdomains for `{s}`. Defaults to [`DEFAULT_SUBDOMAINS`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomains: Option<Subdomains>,
    /// Attribution text shown for the layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    /// Tile width and height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<u32>,
    /// Layer opacity in `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Stacking order of the layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Number added to the zoom level in tile URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_offset: Option<i32>,
    /// Counts zoom levels in tile URLs down from `max_zoom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_reverse: Option<bool>,
    /// Inverts the y axis in tile URLs (TMS services).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tms: Option<bool>,
    /// URL of the image shown in place of tiles that failed to load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_tile_url: Option<String>,
    /// Options this struct does not know about. Passed through unvalidated.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TileLayerOptions {
    /// Sets the attribution.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    /// Sets the subdomains.
    pub fn with_subdomains(mut self, subdomains: impl Into<Subdomains>) -> Self {
        self.subdomains = Some(subdomains.into());
        self
    }

    /// Sets the zoom bounds.
    pub fn with_zoom_bounds(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = Some(min_zoom);
        self.max_zoom = Some(max_zoom);
        self
    }

    /// Marks the layer as a TMS layer.
    pub fn with_tms(mut self, value: bool) -> Self {
        self.tms = Some(value);
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

    fn url_zoom(&self, z: u32) -> i64 {
        let mut zoom = i64::from(z);
        if self.zoom_reverse.unwrap_or(false) {
            if let Some(max_zoom) = self.max_zoom {
                zoom = max_zoom.round() as i64 - zoom;
            }
        }
        zoom + i64::from(self.zoom_offset.unwrap_or(0))
    }

    fn subdomain(&self, index: TileIndex) -> String {
        let default = Subdomains::default();
        let subdomains = self.subdomains.as_ref().unwrap_or(&default);
        if subdomains.is_empty() {
            return String::new();
        }

        let sum = i64::from(index.x) + i64::from(index.y);
        let position = sum.unsigned_abs() as usize % subdomains.len();
        subdomains.get(position).unwrap_or_default()
    }
}

/// Parsed tile URL template, e.g. `https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    normalized: String,
    variables: Vec<String>,
}

impl UrlTemplate {
    /// Parses a template.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if template.trim().is_empty() {
            return Err(TemplateError::Empty);
        }

        let regex = placeholder_regex();
        let mut variables = Vec::new();
        let normalized = regex.replace_all(template, |captures: &regex::Captures| {
            let var = key_to_var(&captures[1]);
            if !variables.iter().any(|existing| existing == var) {
                variables.push(var.to_owned());
            }
            format!("{{{var}}}")
        });

        let leftover = regex.replace_all(template, "");
        if leftover.contains(['{', '}']) {
            return Err(TemplateError::Malformed(template.to_owned()));
        }

        Ok(Self {
            source: template.to_owned(),
            normalized: normalized.into_owned(),
            variables,
        })
    }

    /// Template as it was given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Variable names referenced by the template, in order of first use.
    ///
    /// The inverted y coordinate is reported as `-y`.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(String::as_str).map(var_to_key)
    }

    /// Builds the URL of the tile at `index`.
    ///
    /// The tile variables `s`, `x`, `y`, `z`, `r` and `-y` are computed from
    /// the index first. Then every string, number or boolean option of the
    /// layer, typed or extra, is added under its camelCase name, replacing a
    /// tile variable of the same name.
    pub fn tile_url(
        &self,
        index: TileIndex,
        options: &TileLayerOptions,
    ) -> Result<String, TemplateError> {
        let inverted_y = (1i64 << index.z.min(62)) - 1 - i64::from(index.y);
        let y = if options.tms.unwrap_or(false) {
            inverted_y
        } else {
            i64::from(index.y)
        };

        let mut vars: HashMap<String, String> = HashMap::new();
        vars.insert("s".into(), options.subdomain(index));
        vars.insert("x".into(), index.x.to_string());
        vars.insert("y".into(), y.to_string());
        vars.insert("z".into(), options.url_zoom(index.z).to_string());
        vars.insert("r".into(), String::new());
        vars.insert(INVERTED_Y_VAR.into(), inverted_y.to_string());

        let option_values = serde_json::to_value(options)
            .map_err(|err| TemplateError::Format(err.to_string()))?;
        if let serde_json::Value::Object(values) = option_values {
            for (key, value) in values {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    _ => continue,
                };
                vars.insert(key_to_var(&key).to_owned(), value);
            }
        }

        for var in &self.variables {
            if !vars.contains_key(var) {
                let key = var_to_key(var).to_owned();
                return Err(TemplateError::MissingVariable(key));
            }
        }

        let url = strfmt::strfmt(&self.normalized, &vars)
            .map_err(|err| TemplateError::Format(err.to_string()))?;
        log::trace!("Tile {index:?} resolved to {url}");

        Ok(url)
    }
}

impl std::str::FromStr for UrlTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
