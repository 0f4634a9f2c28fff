//! fishbowl crate root: re-exports and module wiring.
//!
//! fishbowl provides a minimalist look for `egui_plot` plots: named presets for
//! axes, color palettes, fonts and colormaps that merge into a single style
//! mapping, applied either permanently or for the duration of a scope.
//!
//! Modules:
//! - `value`: the `StyleMap` option mapping and its values
//! - `defaults`: option keys and the default snapshot
//! - `presets`: built-in presets and the file-backed preset store
//! - `palette` / `colormap`: color cycles and continuous colormaps
//! - `plot_config`: typed plot configuration and the axes factory
//! - `registry`: `StyleRegistry`, `StyleRequest` and the scoped `StyleGuard`
//! - `global`: process-wide `set_style` / `reset_style` / `get_style` / `style`
//! - `draw`: palette previews rendered to PNG
//! - `config`: registry configuration

pub mod colormap;
pub mod config;
pub mod defaults;
pub mod draw;
pub mod error;
pub mod global;
pub mod palette;
pub mod plot_config;
pub mod presets;
pub mod registry;
pub mod value;

// Public re-exports for a compact external API
pub use colormap::{Colormap, ColormapTable};
pub use config::RegistryConfig;
pub use draw::{draw_box_palette, draw_sin_palette, BoxPaletteOptions, SinPaletteOptions};
pub use error::{Result, StyleError};
pub use global::{get_style, reset_style, save_palette, set_style, style, with_registry, GlobalStyleGuard};
pub use palette::{parse_hex_color, to_hex, ColorCycle, PaletteSpec};
pub use plot_config::{AxesInit, AxesLayout, FontConfig, PlotConfig, Spines};
pub use presets::{Category, PresetSource, PresetStore, StoreFormat};
pub use registry::{StyleGuard, StyleRegistry, StyleRequest};
pub use value::{style_map, StyleMap, StyleValue};
