//! Named presets for each style category.
//!
//! - `builtin`: the presets that ship with the crate
//! - `store`: a directory of preset files that extends and overrides them

mod builtin;
mod store;

use std::collections::BTreeMap;
use std::fmt;

use crate::value::StyleMap;

pub use builtin::{axes_presets, font_presets, palette_presets};
pub use store::{PresetSource, PresetStore, StoreFormat};

/// Preset name → option mapping (axes and font categories).
pub type PresetTable = BTreeMap<String, StyleMap>;

/// Preset name → list of hex colors.
pub type PaletteTable = BTreeMap<String, Vec<String>>;

/// The independent axes along which a style request selects presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Spines, grid, ticks and the axes initializer.
    Axes,
    /// Qualitative color cycles.
    Palette,
    /// Font family and size.
    Font,
    /// Continuous colormaps, registered in memory.
    Cmap,
}

impl Category {
    /// Every category.
    pub fn all() -> &'static [Category] {
        &[
            Category::Axes,
            Category::Palette,
            Category::Font,
            Category::Cmap,
        ]
    }

    /// Stem of the preset file backing this category, if it has one.
    ///
    /// Colormaps are registered in memory only.
    pub fn file_stem(&self) -> Option<&'static str> {
        match self {
            Category::Axes => Some("fishbowl.axes"),
            Category::Palette => Some("fishbowl.color"),
            Category::Font => Some("fishbowl.font"),
            Category::Cmap => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Axes => "axes",
            Category::Palette => "palette",
            Category::Font => "font",
            Category::Cmap => "colormap",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
