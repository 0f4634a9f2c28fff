//! Continuous colormaps for image-like plots.

use std::collections::BTreeMap;

use egui::Color32;

use crate::defaults::IMAGE_CMAP;
use crate::error::{Result, StyleError};
use crate::presets::Category;
use crate::value::{StyleMap, StyleValue};

/// A colormap defined by evenly spaced color stops, linearly interpolated.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    stops: Vec<Color32>,
}

impl Colormap {
    /// Create from evenly spaced stops. No stops at all yields a flat gray map.
    pub fn new(stops: Vec<Color32>) -> Self {
        let stops = if stops.is_empty() {
            vec![Color32::GRAY]
        } else {
            stops
        };
        Self { stops }
    }

    /// Treat a qualitative palette as the stops of a continuous map.
    pub fn from_palette(colors: &[Color32]) -> Self {
        Self::new(colors.to_vec())
    }

    pub fn stops(&self) -> &[Color32] {
        &self.stops
    }

    /// Color at position `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> Color32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self.stops.len() == 1 {
            return self.stops[0];
        }
        let scaled = t * (self.stops.len() - 1) as f32;
        let i = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = scaled - i as f32;
        lerp(self.stops[i], self.stops[i + 1], frac)
    }
}

fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let [ar, ag, ab, aa] = a.to_srgba_unmultiplied();
    let [br, bg, bb, ba] = b.to_srgba_unmultiplied();
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(mix(ar, br), mix(ag, bg), mix(ab, bb), mix(aa, ba))
}

/// Named colormaps: the built-ins plus any registered at runtime.
#[derive(Clone, Debug)]
pub struct ColormapTable {
    maps: BTreeMap<String, Colormap>,
}

impl Default for ColormapTable {
    fn default() -> Self {
        let mut maps = BTreeMap::new();
        maps.insert(
            "YlGnBu".to_string(),
            Colormap::new(vec![
                Color32::from_rgb(255, 255, 217),
                Color32::from_rgb(199, 233, 180),
                Color32::from_rgb(65, 182, 196),
                Color32::from_rgb(34, 94, 168),
                Color32::from_rgb(8, 29, 88),
            ]),
        );
        maps.insert(
            "viridis".to_string(),
            Colormap::new(vec![
                Color32::from_rgb(68, 1, 84),
                Color32::from_rgb(59, 82, 139),
                Color32::from_rgb(33, 145, 140),
                Color32::from_rgb(94, 201, 98),
                Color32::from_rgb(253, 231, 37),
            ]),
        );
        maps.insert(
            "greys".to_string(),
            Colormap::new(vec![Color32::WHITE, Color32::BLACK]),
        );
        Self { maps }
    }
}

impl ColormapTable {
    pub fn get(&self, name: &str) -> Result<&Colormap> {
        self.maps
            .get(name)
            .ok_or_else(|| StyleError::unknown(Category::Cmap, name))
    }

    /// Register (or replace) a colormap under `name`.
    pub fn register(&mut self, name: impl Into<String>, cmap: Colormap) {
        let name = name.into();
        log::debug!("registering colormap '{name}'");
        self.maps.insert(name, cmap);
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.maps.keys().cloned().collect()
    }

    /// The style options selecting `name` as the active colormap.
    pub fn cmap_config(&self, name: &str) -> Result<StyleMap> {
        self.get(name)?;
        let mut m = StyleMap::new();
        m.insert(IMAGE_CMAP.to_string(), StyleValue::from(name));
        Ok(m)
    }
}
