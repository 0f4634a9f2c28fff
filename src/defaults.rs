//! Option keys understood by the plot configuration, and the default snapshot.
//!
//! The default snapshot plays the role of the plotting library's own rc
//! defaults: it is what a fresh [`StyleRegistry`](crate::StyleRegistry) starts
//! from and what `reset` returns to. It declares every key the built-in presets
//! touch, so a reset always overwrites everything a preset could have changed.

use crate::value::{style_map, StyleMap, StyleValue};

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

pub const AXES_EDGECOLOR: &str = "axes.edgecolor";
pub const AXES_FACECOLOR: &str = "axes.facecolor";
pub const AXES_GRID: &str = "axes.grid";
pub const AXES_AXISBELOW: &str = "axes.axisbelow";
/// Axes-initializer token: `"default"` or `"despined"`.
pub const AXES_INITIALIZE: &str = "axes.initialize";
/// Color cycle: a list of hex colors assigned to series in order.
pub const AXES_PROP_CYCLE: &str = "axes.prop_cycle";
pub const AXES_SPINES_LEFT: &str = "axes.spines.left";
pub const AXES_SPINES_RIGHT: &str = "axes.spines.right";
pub const AXES_SPINES_TOP: &str = "axes.spines.top";
pub const AXES_SPINES_BOTTOM: &str = "axes.spines.bottom";

pub const GRID_COLOR: &str = "grid.color";
pub const GRID_LINESTYLE: &str = "grid.linestyle";
pub const GRID_LINEWIDTH: &str = "grid.linewidth";

pub const LINES_LINEWIDTH: &str = "lines.linewidth";

pub const XTICK_DIRECTION: &str = "xtick.direction";
pub const XTICK_MAJOR_SIZE: &str = "xtick.major.size";
pub const XTICK_MAJOR_WIDTH: &str = "xtick.major.width";
pub const XTICK_MINOR_SIZE: &str = "xtick.minor.size";
pub const YTICK_MAJOR_SIZE: &str = "ytick.major.size";
pub const YTICK_MINOR_SIZE: &str = "ytick.minor.size";

pub const LEGEND_NUMPOINTS: &str = "legend.numpoints";
pub const LEGEND_FRAMEON: &str = "legend.frameon";

pub const FONT_FAMILY: &str = "font.family";
pub const FONT_SIZE: &str = "font.size";
/// Preferred monospace face names, most preferred first.
pub const FONT_MONOSPACE: &str = "font.monospace";

pub const IMAGE_CMAP: &str = "image.cmap";

/// Token values for [`AXES_INITIALIZE`].
pub const INIT_DEFAULT: &str = "default";
pub const INIT_DESPINED: &str = "despined";

/// Ten-color categorical cycle used when nothing else is selected.
pub const DEFAULT_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub const DEFAULT_CMAP: &str = "viridis";

/// The default snapshot of the underlying plot configuration.
pub fn plot_defaults() -> StyleMap {
    let mut m = style_map([
        (AXES_EDGECOLOR, StyleValue::from("#000000")),
        (AXES_FACECOLOR, "#ffffff".into()),
        (AXES_GRID, false.into()),
        (AXES_AXISBELOW, false.into()),
        (AXES_INITIALIZE, INIT_DEFAULT.into()),
        (AXES_SPINES_LEFT, true.into()),
        (AXES_SPINES_RIGHT, true.into()),
        (AXES_SPINES_TOP, true.into()),
        (AXES_SPINES_BOTTOM, true.into()),
        (GRID_COLOR, "#b0b0b0".into()),
        (GRID_LINESTYLE, "-".into()),
        (GRID_LINEWIDTH, 0.8.into()),
        (LINES_LINEWIDTH, 1.5.into()),
        (XTICK_DIRECTION, "out".into()),
        (XTICK_MAJOR_SIZE, 3.5.into()),
        (XTICK_MAJOR_WIDTH, 0.8.into()),
        (XTICK_MINOR_SIZE, 2.0.into()),
        (YTICK_MAJOR_SIZE, 3.5.into()),
        (YTICK_MINOR_SIZE, 2.0.into()),
        (LEGEND_NUMPOINTS, 1.into()),
        (LEGEND_FRAMEON, true.into()),
        (FONT_FAMILY, "sans-serif".into()),
        (FONT_SIZE, 10.0.into()),
        (FONT_MONOSPACE, StyleValue::List(Vec::new())),
        (IMAGE_CMAP, DEFAULT_CMAP.into()),
    ]);
    m.insert(
        AXES_PROP_CYCLE.to_string(),
        StyleValue::from(DEFAULT_CYCLE.to_vec()),
    );
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_declare_initializer_and_cycle() {
        let d = plot_defaults();
        assert_eq!(d[AXES_INITIALIZE].as_str(), Some(INIT_DEFAULT));
        assert_eq!(
            d[AXES_PROP_CYCLE].as_str_list().map(|l| l.len()),
            Some(DEFAULT_CYCLE.len())
        );
    }

    #[test]
    fn defaults_are_stable_across_calls() {
        assert_eq!(plot_defaults(), plot_defaults());
    }
}
