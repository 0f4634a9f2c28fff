//! Typed plot configuration derived from the current style.
//!
//! [`PlotConfig`] is what the rest of an application consumes: an
//! `egui_plot::Plot` factory that honours the axes initializer, line builders
//! coloured from the active cycle, and a push of fonts/backgrounds into an
//! `egui::Context`. It is rebuilt from scratch on every apply, so it never
//! carries state that the style mapping doesn't.

use egui::{Color32, FontFamily, TextStyle};
use egui_plot::{HPlacement, Legend, Line, Plot, PlotPoints, VPlacement};

use crate::colormap::{Colormap, ColormapTable};
use crate::defaults::*;
use crate::palette::{parse_hex_color, ColorCycle};
use crate::value::{StyleMap, StyleValue};

// ─────────────────────────────────────────────────────────────────────────────
// Axes initializer & layout
// ─────────────────────────────────────────────────────────────────────────────

/// Decoration installed on every newly created plot axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxesInit {
    #[default]
    Default,
    /// Left/right/top spines hidden, x ticks at the bottom, y axis on the right,
    /// vertical grid lines off.
    Despined,
}

impl AxesInit {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            INIT_DEFAULT => Some(AxesInit::Default),
            INIT_DESPINED => Some(AxesInit::Despined),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            AxesInit::Default => INIT_DEFAULT,
            AxesInit::Despined => INIT_DESPINED,
        }
    }
}

/// Which plot border lines are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spines {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Spines {
    pub fn all(&self) -> bool {
        self.left && self.right && self.top && self.bottom
    }
}

/// Resolved layout of a plot's axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxesLayout {
    pub spines: Spines,
    /// Grid lines per axis: `[x, y]`. The x grid is the vertical lines.
    pub grid: [bool; 2],
    pub x_ticks_bottom: bool,
    pub y_axis_right: bool,
}

impl AxesLayout {
    fn resolve(init: AxesInit, spines: Spines, grid: bool) -> Self {
        match init {
            AxesInit::Default => Self {
                spines,
                grid: [grid, grid],
                x_ticks_bottom: true,
                y_axis_right: false,
            },
            AxesInit::Despined => Self {
                spines: Spines {
                    left: false,
                    right: false,
                    top: false,
                    bottom: spines.bottom,
                },
                grid: [false, grid],
                x_ticks_bottom: true,
                y_axis_right: true,
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fonts
// ─────────────────────────────────────────────────────────────────────────────

/// Font selection pushed into egui text styles.
#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    pub family: FontFamily,
    /// Body text size in points; headings and small text scale from it.
    pub size: f32,
    /// Requested monospace faces, most preferred first. Font data is not
    /// loaded here; callers that install fonts can match on these names.
    pub monospace: Vec<String>,
}

impl FontConfig {
    fn family_from_name(name: &str) -> FontFamily {
        match name.to_ascii_lowercase().as_str() {
            "monospace" | "mono" => FontFamily::Monospace,
            "sans-serif" | "sans" | "serif" | "proportional" => FontFamily::Proportional,
            other => {
                log::warn!("font family '{other}' is not registered, using proportional");
                FontFamily::Proportional
            }
        }
    }

    /// Size for a given egui text style, relative to the body size.
    pub fn size_for(&self, style: &TextStyle) -> f32 {
        match style {
            TextStyle::Heading => self.size * 1.4,
            TextStyle::Small => self.size * 0.7,
            _ => self.size,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Typed view of a style mapping, as consumed by egui/egui_plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub axes_init: AxesInit,
    pub layout: AxesLayout,
    pub cycle: ColorCycle,
    pub line_width: f32,
    pub face_color: Color32,
    /// Pushed as the stroke of frames and separators.
    pub edge_color: Color32,
    /// `egui_plot` derives its grid from the text color, so the grid color and
    /// width are only exposed for custom painters.
    pub grid_color: Color32,
    pub grid_width: f32,
    pub legend_frame: bool,
    pub font: FontConfig,
    pub cmap_name: String,
    pub cmap: Colormap,
}

impl PlotConfig {
    /// Translate a style mapping. Missing or malformed values fall back to the
    /// default snapshot's value and are logged; this never fails.
    pub fn from_style(style: &StyleMap, cmaps: &ColormapTable) -> Self {
        let lookup = Lookup {
            style,
            fallback: plot_defaults(),
        };
        let axes_init = match lookup.get(AXES_INITIALIZE) {
            Some(v) => v.as_str().and_then(AxesInit::from_token).unwrap_or_else(|| {
                log::warn!("unknown axes initializer {v}");
                AxesInit::Default
            }),
            None => AxesInit::Default,
        };
        let spines = Spines {
            left: lookup.flag(AXES_SPINES_LEFT),
            right: lookup.flag(AXES_SPINES_RIGHT),
            top: lookup.flag(AXES_SPINES_TOP),
            bottom: lookup.flag(AXES_SPINES_BOTTOM),
        };
        let layout = AxesLayout::resolve(axes_init, spines, lookup.flag(AXES_GRID));

        let font = FontConfig {
            family: lookup
                .get(FONT_FAMILY)
                .and_then(StyleValue::as_str)
                .map(FontConfig::family_from_name)
                .unwrap_or(FontFamily::Proportional),
            size: lookup.number(FONT_SIZE),
            monospace: lookup
                .get(FONT_MONOSPACE)
                .and_then(StyleValue::as_str_list)
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        let requested_cmap = lookup
            .get(IMAGE_CMAP)
            .and_then(StyleValue::as_str)
            .unwrap_or(DEFAULT_CMAP);
        let (cmap_name, cmap) = match cmaps.get(requested_cmap) {
            Ok(c) => (requested_cmap.to_string(), c.clone()),
            Err(e) => {
                log::warn!("{e}, using {DEFAULT_CMAP}");
                let c = cmaps
                    .get(DEFAULT_CMAP)
                    .cloned()
                    .unwrap_or_else(|_| Colormap::new(Vec::new()));
                (DEFAULT_CMAP.to_string(), c)
            }
        };

        Self {
            axes_init,
            layout,
            cycle: lookup
                .get(AXES_PROP_CYCLE)
                .map(ColorCycle::from_value)
                .unwrap_or_else(|| ColorCycle::new(Vec::new())),
            line_width: lookup.number(LINES_LINEWIDTH),
            face_color: lookup.color(AXES_FACECOLOR),
            edge_color: lookup.color(AXES_EDGECOLOR),
            grid_color: lookup.color(GRID_COLOR),
            grid_width: lookup.number(GRID_LINEWIDTH),
            legend_frame: lookup.flag(LEGEND_FRAMEON),
            font,
            cmap_name,
            cmap,
        }
    }

    /// Create plot axes decorated according to the active axes initializer.
    pub fn plot(&self, id: impl std::hash::Hash) -> Plot<'static> {
        let layout = &self.layout;
        let legend = if self.legend_frame {
            Legend::default()
        } else {
            Legend::default().background_alpha(0.0)
        };
        Plot::new(id)
            .show_grid(layout.grid)
            .show_axes([true, true])
            .show_background(layout.spines.all())
            .x_axis_position(if layout.x_ticks_bottom {
                VPlacement::Bottom
            } else {
                VPlacement::Top
            })
            .y_axis_position(if layout.y_axis_right {
                HPlacement::Right
            } else {
                HPlacement::Left
            })
            .legend(legend)
    }

    /// A line for the `index`-th series, coloured from the active cycle.
    pub fn line(
        &self,
        index: usize,
        name: impl Into<String>,
        points: Vec<[f64; 2]>,
    ) -> Line<'static> {
        Line::new(name.into(), PlotPoints::from(points))
            .color(self.cycle.color(index))
            .width(self.line_width)
    }

    /// Push fonts, the background colour and the edge colour into an egui
    /// context.
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let font = self.font.clone();
        let face = self.face_color;
        let edge = self.edge_color;
        ctx.style_mut(|style| {
            for (text_style, font_id) in style.text_styles.iter_mut() {
                font_id.size = font.size_for(text_style);
                if !matches!(text_style, TextStyle::Monospace) {
                    font_id.family = font.family.clone();
                }
            }
            style.visuals.extreme_bg_color = face;
            style.visuals.widgets.noninteractive.bg_stroke.color = edge;
        });
    }
}

/// Style lookup with per-key fallback to the default snapshot.
struct Lookup<'a> {
    style: &'a StyleMap,
    fallback: StyleMap,
}

impl Lookup<'_> {
    fn get(&self, key: &str) -> Option<&StyleValue> {
        self.style.get(key).or_else(|| self.fallback.get(key))
    }

    fn flag(&self, key: &str) -> bool {
        let v = self.get(key);
        v.and_then(StyleValue::as_bool).unwrap_or_else(|| {
            log::warn!("{key}: expected a boolean, got {v:?}");
            self.fallback
                .get(key)
                .and_then(StyleValue::as_bool)
                .unwrap_or(false)
        })
    }

    fn number(&self, key: &str) -> f32 {
        let v = self.get(key);
        v.and_then(StyleValue::as_f32).unwrap_or_else(|| {
            log::warn!("{key}: expected a number, got {v:?}");
            self.fallback
                .get(key)
                .and_then(StyleValue::as_f32)
                .unwrap_or(1.0)
        })
    }

    fn color(&self, key: &str) -> Color32 {
        let v = self.get(key);
        match v.and_then(StyleValue::as_str).map(parse_hex_color) {
            Some(Ok(c)) => c,
            _ => {
                log::warn!("{key}: expected a hex color, got {v:?}");
                self.fallback
                    .get(key)
                    .and_then(StyleValue::as_str)
                    .and_then(|s| parse_hex_color(s).ok())
                    .unwrap_or(Color32::GRAY)
            }
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::from_style(&plot_defaults(), &ColormapTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::style_map;

    #[test]
    fn defaults_give_plain_axes() {
        let cfg = PlotConfig::default();
        assert_eq!(cfg.axes_init, AxesInit::Default);
        assert!(cfg.layout.spines.all());
        assert_eq!(cfg.layout.grid, [false, false]);
        assert!(!cfg.layout.y_axis_right);
        assert_eq!(cfg.cycle.len(), DEFAULT_CYCLE.len());
        assert_eq!(cfg.cmap_name, DEFAULT_CMAP);
    }

    #[test]
    fn despined_layout_hides_spines_and_vertical_grid() {
        let mut style = plot_defaults();
        style.extend(style_map([
            (AXES_INITIALIZE, StyleValue::from(INIT_DESPINED)),
            (AXES_GRID, true.into()),
        ]));
        let cfg = PlotConfig::from_style(&style, &ColormapTable::default());
        assert_eq!(cfg.axes_init, AxesInit::Despined);
        assert!(!cfg.layout.spines.left);
        assert!(!cfg.layout.spines.right);
        assert!(!cfg.layout.spines.top);
        assert!(cfg.layout.spines.bottom);
        assert_eq!(cfg.layout.grid, [false, true]);
        assert!(cfg.layout.x_ticks_bottom);
        assert!(cfg.layout.y_axis_right);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let mut style = plot_defaults();
        style.extend(style_map([
            (LINES_LINEWIDTH, StyleValue::from("thick")),
            (AXES_FACECOLOR, "not-a-color".into()),
            (AXES_INITIALIZE, "wobbly".into()),
            (IMAGE_CMAP, "nope".into()),
        ]));
        let cfg = PlotConfig::from_style(&style, &ColormapTable::default());
        assert_eq!(cfg.line_width, 1.5);
        assert_eq!(cfg.face_color, Color32::WHITE);
        assert_eq!(cfg.axes_init, AxesInit::Default);
        assert_eq!(cfg.cmap_name, DEFAULT_CMAP);
    }

    #[test]
    fn numeric_font_size_string_is_accepted() {
        let mut style = plot_defaults();
        style.insert(FONT_SIZE.to_string(), "20".into());
        let cfg = PlotConfig::from_style(&style, &ColormapTable::default());
        assert_eq!(cfg.font.size, 20.0);
        assert_eq!(cfg.font.size_for(&TextStyle::Heading), 28.0);
    }

    #[test]
    fn lines_take_cycle_colors_in_order() {
        let mut style = plot_defaults();
        style.insert(
            AXES_PROP_CYCLE.to_string(),
            vec!["#ff0000", "#00ff00"].into(),
        );
        let cfg = PlotConfig::from_style(&style, &ColormapTable::default());
        assert_eq!(cfg.cycle.color(0), Color32::from_rgb(255, 0, 0));
        assert_eq!(cfg.cycle.color(1), Color32::from_rgb(0, 255, 0));
        assert_eq!(cfg.cycle.color(2), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn context_receives_font_size_and_face() {
        let mut style = plot_defaults();
        style.insert(FONT_SIZE.to_string(), 18.0.into());
        style.insert(AXES_FACECOLOR.to_string(), "#fafafa".into());
        style.insert(AXES_EDGECOLOR.to_string(), "#333333".into());
        let cfg = PlotConfig::from_style(&style, &ColormapTable::default());
        let ctx = egui::Context::default();
        cfg.apply_to_context(&ctx);
        let st = ctx.style();
        assert_eq!(st.text_styles[&TextStyle::Body].size, 18.0);
        assert_eq!(st.visuals.extreme_bg_color, Color32::from_rgb(250, 250, 250));
        assert_eq!(
            st.visuals.widgets.noninteractive.bg_stroke.color,
            Color32::from_rgb(0x33, 0x33, 0x33)
        );
    }
}
