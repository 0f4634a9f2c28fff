//! Color palettes: hex parsing, palette selection and the color cycle.

use egui::Color32;

use crate::defaults::AXES_PROP_CYCLE;
use crate::error::{Result, StyleError};
use crate::value::{StyleMap, StyleValue};

/// Parse `#rrggbb`, `#rrggbbaa` (the `#` is optional) into a color.
pub fn parse_hex_color(s: &str) -> Result<Color32> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || StyleError::InvalidColor(s.to_string());
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Format a color as lowercase `#rrggbb`, or `#rrggbbaa` when not opaque.
pub fn to_hex(c: Color32) -> String {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Parse a whole list of hex colors, failing on the first bad entry.
pub fn parse_palette<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Color32>> {
    colors.iter().map(|c| parse_hex_color(c.as_ref())).collect()
}

/// How a caller selects a palette: by preset name or with explicit colors.
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteSpec {
    Named(String),
    Colors(Vec<Color32>),
}

impl From<&str> for PaletteSpec {
    fn from(name: &str) -> Self {
        PaletteSpec::Named(name.to_string())
    }
}

impl From<String> for PaletteSpec {
    fn from(name: String) -> Self {
        PaletteSpec::Named(name)
    }
}

impl From<Vec<Color32>> for PaletteSpec {
    fn from(colors: Vec<Color32>) -> Self {
        PaletteSpec::Colors(colors)
    }
}

/// The style options that make `colors` the active color cycle.
pub fn palette_config<S: AsRef<str>>(colors: &[S]) -> StyleMap {
    let list = colors
        .iter()
        .map(|c| StyleValue::Text(c.as_ref().to_string()))
        .collect();
    let mut m = StyleMap::new();
    m.insert(AXES_PROP_CYCLE.to_string(), StyleValue::List(list));
    m
}

/// Colors assigned to successive series, wrapping around at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorCycle(Vec<Color32>);

impl ColorCycle {
    pub fn new(colors: Vec<Color32>) -> Self {
        Self(colors)
    }

    /// Build from an `axes.prop_cycle` value. Entries that don't parse are skipped.
    pub fn from_value(value: &StyleValue) -> Self {
        let colors = value
            .as_list()
            .unwrap_or_default()
            .iter()
            .filter_map(|v| match v.as_str().map(parse_hex_color) {
                Some(Ok(c)) => Some(c),
                _ => {
                    log::warn!("ignoring non-color entry {v} in {AXES_PROP_CYCLE}");
                    None
                }
            })
            .collect();
        Self(colors)
    }

    /// Color for the series at `index`. An empty cycle yields gray.
    pub fn color(&self, index: usize) -> Color32 {
        if self.0.is_empty() {
            Color32::GRAY
        } else {
            self.0[index % self.0.len()]
        }
    }

    pub fn colors(&self) -> &[Color32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(
            parse_hex_color("#1b9e77").unwrap(),
            Color32::from_rgb(0x1b, 0x9e, 0x77)
        );
        assert_eq!(
            parse_hex_color("D95F02").unwrap(),
            Color32::from_rgb(0xd9, 0x5f, 0x02)
        );
    }

    #[test]
    fn parses_alpha() {
        let c = parse_hex_color("#ff000080").unwrap();
        assert_eq!(c.to_srgba_unmultiplied()[3], 0x80);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#fff", "#12345g", "red", "#ééé"] {
            assert!(
                matches!(parse_hex_color(bad), Err(StyleError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn hex_round_trip_is_lowercase() {
        assert_eq!(to_hex(parse_hex_color("#ABCDEF").unwrap()), "#abcdef");
    }

    #[test]
    fn cycle_wraps_and_skips_bad_entries() {
        let v = StyleValue::List(vec!["#000000".into(), 7.into(), "#ffffff".into()]);
        let cycle = ColorCycle::from_value(&v);
        assert_eq!(cycle.len(), 2);
        assert_eq!(cycle.color(0), Color32::BLACK);
        assert_eq!(cycle.color(3), Color32::WHITE);
    }

    #[test]
    fn empty_cycle_is_gray() {
        assert_eq!(ColorCycle::new(Vec::new()).color(5), Color32::GRAY);
    }
}
