//! Presets shipped with the crate.

use crate::defaults::*;
use crate::value::{style_map, StyleValue};

use super::{PaletteTable, PresetTable};

/// Built-in axes presets: `minimal` and `classic`.
pub fn axes_presets() -> PresetTable {
    let mut t = PresetTable::new();
    t.insert(
        "minimal".to_string(),
        style_map([
            // pronounced x-axis relative to the grid lines
            (AXES_EDGECOLOR, StyleValue::from("#000000")),
            (AXES_GRID, true.into()),
            (AXES_FACECOLOR, "#ffffff".into()),
            (AXES_AXISBELOW, true.into()),
            (AXES_INITIALIZE, INIT_DESPINED.into()),
            (AXES_SPINES_LEFT, false.into()),
            (AXES_SPINES_RIGHT, false.into()),
            (AXES_SPINES_TOP, false.into()),
            (GRID_COLOR, "#e0e0e0".into()),
            (GRID_LINESTYLE, "-".into()),
            (GRID_LINEWIDTH, 1.0.into()),
            (LINES_LINEWIDTH, 2.5.into()),
            (XTICK_DIRECTION, "out".into()),
            (XTICK_MAJOR_SIZE, 6.into()),
            (XTICK_MAJOR_WIDTH, 1.into()),
            (XTICK_MINOR_SIZE, 0.into()),
            (YTICK_MAJOR_SIZE, 0.into()),
            (YTICK_MINOR_SIZE, 0.into()),
            (LEGEND_NUMPOINTS, 1.into()),
            (LEGEND_FRAMEON, false.into()),
        ]),
    );
    t.insert(
        "classic".to_string(),
        style_map([
            (AXES_EDGECOLOR, StyleValue::from("#000000")),
            (AXES_GRID, false.into()),
            (AXES_FACECOLOR, "#ffffff".into()),
            (AXES_INITIALIZE, INIT_DEFAULT.into()),
            (AXES_SPINES_LEFT, true.into()),
            (AXES_SPINES_RIGHT, true.into()),
            (AXES_SPINES_TOP, true.into()),
            (AXES_SPINES_BOTTOM, true.into()),
            (LINES_LINEWIDTH, 1.0.into()),
            (XTICK_DIRECTION, "in".into()),
            (LEGEND_FRAMEON, true.into()),
        ]),
    );
    t
}

/// Built-in qualitative palettes.
pub fn palette_presets() -> PaletteTable {
    let entries: [(&str, &[&str]); 4] = [
        (
            "goldfish",
            &[
                "#f28e2b", "#4e79a7", "#59a14f", "#e15759", "#76b7b2", "#edc948", "#b07aa1",
            ],
        ),
        (
            "gourami",
            &[
                "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02",
            ],
        ),
        (
            "betta",
            &["#3a0ca3", "#f72585", "#4361ee", "#7209b7", "#4cc9f0"],
        ),
        (
            "koi",
            &["#e63946", "#1d3557", "#f4a261", "#2a9d8f", "#264653"],
        ),
    ];
    entries
        .iter()
        .map(|(name, colors)| {
            (
                name.to_string(),
                colors.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

/// Built-in font presets.
pub fn font_presets() -> PresetTable {
    let mut t = PresetTable::new();
    t.insert(
        "inconsolata".to_string(),
        style_map([
            (FONT_FAMILY, StyleValue::from("monospace")),
            (FONT_SIZE, 20.0.into()),
            (FONT_MONOSPACE, vec!["Inconsolata"].into()),
        ]),
    );
    t.insert(
        "proportional".to_string(),
        style_map([
            (FONT_FAMILY, StyleValue::from("sans-serif")),
            (FONT_SIZE, 12.0.into()),
        ]),
    );
    t.insert(
        "large".to_string(),
        style_map([
            (FONT_FAMILY, StyleValue::from("sans-serif")),
            (FONT_SIZE, 16.0.into()),
        ]),
    );
    t
}
