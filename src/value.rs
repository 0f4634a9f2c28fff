//! Style values and the flat option mapping they live in.
//!
//! A [`StyleMap`] is the unit everything else in the crate trades in: presets
//! are style maps, the current style is a style map, and a full override is a
//! style map. Keys are dotted option names such as `axes.grid`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Flat mapping from option key to option value.
///
/// A `BTreeMap` keeps iteration order stable, which makes snapshots directly
/// comparable and serialized presets diff-friendly.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A single style option value.
///
/// Serialized untagged, so preset files stay plain JSON/YAML:
/// `true`, `6`, `2.5`, `"#e0e0e0"`, `["#1b9e77", "#d95f02"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Flags such as `axes.grid`.
    Bool(bool),
    /// Whole numbers such as `legend.numpoints`.
    Int(i64),
    /// Sizes and widths such as `font.size`.
    Float(f64),
    /// Colors, tokens and names such as `axes.initialize`.
    Text(String),
    /// Sequences such as the color cycle.
    List(Vec<StyleValue>),
}

impl StyleValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            StyleValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" => Some(true),
                "false" | "off" | "no" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Numeric view of the value. Numeric strings (`"20"`) are accepted too.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Int(i) => Some(*i as f64),
            StyleValue::Float(f) => Some(*f),
            StyleValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        self.as_f64().map(|v| v as f32)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[StyleValue]> {
        match self {
            StyleValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// List of strings, e.g. a color cycle. `None` if any element is not text.
    pub fn as_str_list(&self) -> Option<Vec<&str>> {
        self.as_list()?.iter().map(StyleValue::as_str).collect()
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{b}"),
            StyleValue::Int(i) => write!(f, "{i}"),
            StyleValue::Float(v) => write!(f, "{v}"),
            StyleValue::Text(s) => write!(f, "{s:?}"),
            StyleValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<i64> for StyleValue {
    fn from(v: i64) -> Self {
        StyleValue::Int(v)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        StyleValue::Int(v as i64)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Float(v)
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Float(v as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(v: Vec<T>) -> Self {
        StyleValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// Build a [`StyleMap`] from `(key, value)` pairs.
///
/// ```
/// use fishbowl::{style_map, StyleValue};
///
/// let m = style_map([("axes.grid", StyleValue::from(true)), ("lines.linewidth", 2.5.into())]);
/// assert_eq!(m["axes.grid"], StyleValue::Bool(true));
/// ```
pub fn style_map<K, V, I>(entries: I) -> StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Overwrite/add every entry of `overlay` onto `base`. Keys absent from
/// `overlay` are left alone.
pub fn merge_into(base: &mut StyleMap, overlay: StyleMap) {
    for (k, v) in overlay {
        base.insert(k, v);
    }
}
