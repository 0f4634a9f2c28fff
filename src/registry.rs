//! The style registry: current style, preset resolution and scoped application.
//!
//! A [`StyleRegistry`] owns the current [`StyleMap`] and the [`PlotConfig`]
//! derived from it. Styles are applied either permanently ([`StyleRegistry::set`])
//! or for the lifetime of a [`StyleGuard`] ([`StyleRegistry::style`]), which
//! restores the prior style when dropped, whether the scope ends normally,
//! through an early `?` return, or by unwinding.
//!
//! ```
//! use fishbowl::{StyleRegistry, StyleRequest};
//!
//! let mut reg = StyleRegistry::new();
//! let before = reg.get_style();
//! {
//!     let scoped = reg.style(StyleRequest::new().axes("minimal")).unwrap();
//!     assert_eq!(scoped.get_style()["axes.grid"].as_bool(), Some(true));
//! }
//! assert_eq!(reg.get_style(), before);
//! ```

use std::ops::{Deref, DerefMut};

use egui::Color32;

use crate::colormap::{Colormap, ColormapTable};
use crate::config::RegistryConfig;
use crate::error::Result;
use crate::palette::{palette_config, PaletteSpec};
use crate::plot_config::PlotConfig;
use crate::presets::{PresetSource, PresetStore};
use crate::value::{merge_into, StyleMap};

// ─────────────────────────────────────────────────────────────────────────────
// StyleRequest
// ─────────────────────────────────────────────────────────────────────────────

/// What a caller wants applied. Unset components are left as they are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRequest {
    pub axes: Option<String>,
    pub palette: Option<PaletteSpec>,
    pub font: Option<String>,
    pub cmap: Option<String>,
    /// A complete style. When set, every other field is ignored.
    pub full_style: Option<StyleMap>,
}

impl StyleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The house look: minimal axes, goldfish palette, inconsolata, YlGnBu.
    pub fn house() -> Self {
        Self::new()
            .axes("minimal")
            .palette("goldfish")
            .font("inconsolata")
            .cmap("YlGnBu")
    }

    pub fn axes(mut self, name: impl Into<String>) -> Self {
        self.axes = Some(name.into());
        self
    }

    pub fn palette(mut self, palette: impl Into<PaletteSpec>) -> Self {
        self.palette = Some(palette.into());
        self
    }

    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.font = Some(name.into());
        self
    }

    pub fn cmap(mut self, name: impl Into<String>) -> Self {
        self.cmap = Some(name.into());
        self
    }

    pub fn full_style(mut self, style: StyleMap) -> Self {
        self.full_style = Some(style);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StyleRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Holds the current style and pushes it into the plot configuration.
#[derive(Debug)]
pub struct StyleRegistry {
    defaults: StyleMap,
    current: StyleMap,
    plot: PlotConfig,
    store: PresetStore,
    cmaps: ColormapTable,
    ctx: Option<egui::Context>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    /// A registry with built-in presets and the stock default snapshot.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let cmaps = ColormapTable::default();
        let plot = PlotConfig::from_style(&config.defaults, &cmaps);
        Self {
            current: config.defaults.clone(),
            store: config.store(),
            defaults: config.defaults,
            plot,
            cmaps,
            ctx: None,
        }
    }

    // ── reading ─────────────────────────────────────────────────────────

    /// A copy of the current style. Mutating it does not affect the registry.
    pub fn get_style(&self) -> StyleMap {
        self.current.clone()
    }

    /// The default snapshot `reset` restores.
    pub fn defaults(&self) -> &StyleMap {
        &self.defaults
    }

    /// The plot configuration derived from the current style.
    pub fn plot_config(&self) -> &PlotConfig {
        &self.plot
    }

    pub fn store(&self) -> &PresetStore {
        &self.store
    }

    pub fn colormaps(&self) -> &ColormapTable {
        &self.cmaps
    }

    // ── applying ────────────────────────────────────────────────────────

    /// Make `style` the current style and push it into the plot configuration
    /// (and the attached egui context, if any).
    pub fn apply(&mut self, style: StyleMap) {
        log::debug!("applying style with {} options", style.len());
        self.plot = PlotConfig::from_style(&style, &self.cmaps);
        self.current = style;
        if let Some(ctx) = &self.ctx {
            self.plot.apply_to_context(ctx);
        }
    }

    /// Merge `options` onto the current style and apply the result.
    pub fn update(&mut self, options: StyleMap) {
        let mut style = self.get_style();
        merge_into(&mut style, options);
        self.apply(style);
    }

    /// Resolve a request into the complete style it would produce, without
    /// applying anything.
    pub fn resolve(&self, request: &StyleRequest) -> Result<StyleMap> {
        if let Some(full) = &request.full_style {
            return Ok(full.clone());
        }
        let mut style = self.get_style();
        if let Some(palette) = &request.palette {
            let colors = self.store.palette_hex(palette)?;
            merge_into(&mut style, palette_config(&colors));
        }
        if let Some(cmap) = &request.cmap {
            merge_into(&mut style, self.cmaps.cmap_config(cmap)?);
        }
        if let Some(axes) = &request.axes {
            merge_into(&mut style, self.store.axes(axes)?);
        }
        if let Some(font) = &request.font {
            merge_into(&mut style, self.store.font(font)?);
        }
        Ok(style)
    }

    /// Apply a request permanently.
    ///
    /// Every lookup happens before anything is applied, so an unknown preset
    /// name leaves the current style untouched.
    pub fn set(&mut self, request: StyleRequest) -> Result<()> {
        let style = self.resolve(&request)?;
        log::debug!(
            "set style: axes={:?} palette={:?} font={:?} cmap={:?} full={}",
            request.axes,
            request.palette,
            request.font,
            request.cmap,
            request.full_style.is_some()
        );
        self.apply(style);
        Ok(())
    }

    /// Restore the default snapshot.
    pub fn reset(&mut self) {
        log::debug!("resetting style to defaults");
        self.apply(self.defaults.clone());
    }

    // ── scoped application ──────────────────────────────────────────────

    /// Apply `request` until the returned guard is dropped.
    ///
    /// If the request fails to resolve, no guard is created and nothing changes.
    pub fn style(&mut self, request: StyleRequest) -> Result<StyleGuard<'_>> {
        let snapshot = self.get_style();
        self.set(request)?;
        Ok(StyleGuard {
            registry: self,
            snapshot: Some(snapshot),
        })
    }

    /// Run `f` with `request` applied, restoring the prior style afterwards.
    pub fn with_style<R>(
        &mut self,
        request: StyleRequest,
        f: impl FnOnce(&mut StyleRegistry) -> R,
    ) -> Result<R> {
        let mut guard = self.style(request)?;
        let out = f(&mut *guard);
        drop(guard);
        Ok(out)
    }

    // ── collaborators ───────────────────────────────────────────────────

    /// Push every subsequent apply into `ctx`. The current style is pushed now.
    pub fn attach_context(&mut self, ctx: &egui::Context) {
        self.plot.apply_to_context(ctx);
        self.ctx = Some(ctx.clone());
    }

    pub fn detach_context(&mut self) {
        self.ctx = None;
    }

    /// Register a colormap so that requests and `image.cmap` can name it.
    pub fn register_cmap(&mut self, name: impl Into<String>, cmap: Colormap) {
        self.cmaps.register(name, cmap);
    }

    pub fn save_palette(&self, name: &str, colors: &[Color32]) -> Result<()> {
        self.store
            .save_palette(name, &PaletteSpec::Colors(colors.to_vec()))
    }

    pub fn save_axes(&self, name: &str, source: impl Into<PresetSource>) -> Result<()> {
        self.store.save_axes(name, source.into())
    }

    pub fn save_font(&self, name: &str, source: impl Into<PresetSource>) -> Result<()> {
        self.store.save_font(name, source.into())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StyleGuard
// ─────────────────────────────────────────────────────────────────────────────

/// Scoped style application. Dropping the guard re-applies the style that was
/// current when it was created.
///
/// The guard dereferences to the registry, so the scoped style can be read and
/// used while it is active.
#[must_use = "the style is restored as soon as the guard is dropped"]
pub struct StyleGuard<'a> {
    registry: &'a mut StyleRegistry,
    snapshot: Option<StyleMap>,
}

impl StyleGuard<'_> {
    /// The style that will be restored.
    pub fn snapshot(&self) -> &StyleMap {
        // always Some until drop
        self.snapshot.as_ref().unwrap_or(&self.registry.defaults)
    }
}

impl Deref for StyleGuard<'_> {
    type Target = StyleRegistry;

    fn deref(&self) -> &StyleRegistry {
        self.registry
    }
}

impl DerefMut for StyleGuard<'_> {
    fn deref_mut(&mut self) -> &mut StyleRegistry {
        self.registry
    }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            log::debug!("leaving scoped style, restoring snapshot");
            self.registry.apply(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::*;

    #[test]
    fn full_style_ignores_named_components() {
        let reg = StyleRegistry::new();
        let mut full = plot_defaults();
        full.insert(LINES_LINEWIDTH.to_string(), 4.0.into());
        let req = StyleRequest::new().axes("doesnotexist").full_style(full.clone());
        assert_eq!(reg.resolve(&req).unwrap(), full);
    }

    #[test]
    fn update_merges_partial_options() {
        let mut reg = StyleRegistry::new();
        let mut opts = StyleMap::new();
        opts.insert(LINES_LINEWIDTH.to_string(), 3.0.into());
        reg.update(opts);
        assert_eq!(reg.get_style()[LINES_LINEWIDTH].as_f64(), Some(3.0));
        assert_eq!(reg.get_style().len(), plot_defaults().len());
        assert_eq!(reg.plot_config().line_width, 3.0);
    }

    #[test]
    fn guard_exposes_snapshot() {
        let mut reg = StyleRegistry::new();
        let before = reg.get_style();
        let guard = reg.style(StyleRequest::new().font("large")).unwrap();
        assert_eq!(guard.snapshot(), &before);
        assert_eq!(guard.plot_config().font.size, 16.0);
    }

    #[test]
    fn house_style_resolves_with_builtins() {
        let reg = StyleRegistry::new();
        let style = reg.resolve(&StyleRequest::house()).unwrap();
        assert_eq!(style[IMAGE_CMAP].as_str(), Some("YlGnBu"));
        assert_eq!(style[AXES_INITIALIZE].as_str(), Some(INIT_DESPINED));
        assert_eq!(style[FONT_SIZE].as_f64(), Some(20.0));
    }
}
