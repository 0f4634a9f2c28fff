//! File-backed preset storage.
//!
//! One file per category inside a preset directory (`fishbowl.axes.json`,
//! `fishbowl.color.json`, `fishbowl.font.json`). Files are read lazily on every
//! lookup and rewritten wholesale on save, so external edits are picked up
//! without any reload step. Entries in a file shadow built-ins of the same name.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StyleError};
use crate::palette::{parse_palette, to_hex, PaletteSpec};
use crate::value::StyleMap;

use super::{axes_presets, font_presets, palette_presets, Category};

/// On-disk encoding of preset files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreFormat {
    #[default]
    Json,
    Yaml,
}

impl StoreFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            StoreFormat::Json => "json",
            StoreFormat::Yaml => "yaml",
        }
    }

    /// Format implied by a file extension; anything but `yaml`/`yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => StoreFormat::Yaml,
            _ => StoreFormat::Json,
        }
    }
}

/// What to store under a new preset name.
#[derive(Clone, Debug, PartialEq)]
pub enum PresetSource {
    /// An explicit option mapping.
    Options(StyleMap),
    /// Copy of an existing preset in the same category.
    Named(String),
}

impl From<StyleMap> for PresetSource {
    fn from(m: StyleMap) -> Self {
        PresetSource::Options(m)
    }
}

impl From<&str> for PresetSource {
    fn from(name: &str) -> Self {
        PresetSource::Named(name.to_string())
    }
}

/// Preset lookup over the built-ins plus an optional preset directory.
#[derive(Clone, Debug, Default)]
pub struct PresetStore {
    dir: Option<PathBuf>,
    format: StoreFormat,
}

impl PresetStore {
    /// A store with only the built-in presets. Saving fails.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn new(dir: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self {
            dir: Some(dir.into()),
            format,
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    /// Path of the file backing `category`, if this store has a directory.
    pub fn path_for(&self, category: Category) -> Option<PathBuf> {
        let dir = self.dir.as_ref()?;
        let stem = category.file_stem()?;
        Some(dir.join(format!("{stem}.{}", self.format.extension())))
    }

    // ── lookup ──────────────────────────────────────────────────────────

    pub fn axes(&self, name: &str) -> Result<StyleMap> {
        self.lookup(Category::Axes, name, axes_presets)
    }

    pub fn font(&self, name: &str) -> Result<StyleMap> {
        self.lookup(Category::Font, name, font_presets)
    }

    /// Hex colors of the named palette.
    pub fn palette(&self, name: &str) -> Result<Vec<String>> {
        self.lookup(Category::Palette, name, palette_presets)
    }

    /// Resolve a palette selection to colors.
    pub fn palette_colors(&self, spec: &PaletteSpec) -> Result<Vec<Color32>> {
        match spec {
            PaletteSpec::Named(name) => parse_palette(&self.palette(name)?),
            PaletteSpec::Colors(colors) => Ok(colors.clone()),
        }
    }

    /// Hex strings of a palette selection. Named palettes come back exactly
    /// as stored, after every entry has been checked to parse.
    pub fn palette_hex(&self, spec: &PaletteSpec) -> Result<Vec<String>> {
        match spec {
            PaletteSpec::Named(name) => {
                let hex = self.palette(name)?;
                parse_palette(&hex)?;
                Ok(hex)
            }
            PaletteSpec::Colors(colors) => Ok(colors.iter().copied().map(to_hex).collect()),
        }
    }

    /// Sorted names known in `category`, stored and built-in.
    pub fn names(&self, category: Category) -> Result<Vec<String>> {
        let mut names: Vec<String> = match category {
            Category::Axes => self.merged(category, axes_presets)?.into_keys().collect(),
            Category::Font => self.merged(category, font_presets)?.into_keys().collect(),
            Category::Palette => self
                .merged(category, palette_presets)?
                .into_keys()
                .collect(),
            Category::Cmap => Vec::new(),
        };
        names.sort();
        Ok(names)
    }

    fn lookup<T, F>(&self, category: Category, name: &str, builtin: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> BTreeMap<String, T>,
    {
        let mut stored: BTreeMap<String, T> = self.read_file(category)?;
        if let Some(v) = stored.remove(name) {
            log::debug!("{category} preset '{name}' loaded from store");
            return Ok(v);
        }
        builtin()
            .remove(name)
            .ok_or_else(|| StyleError::unknown(category, name))
    }

    fn merged<T, F>(&self, category: Category, builtin: F) -> Result<BTreeMap<String, T>>
    where
        T: DeserializeOwned,
        F: FnOnce() -> BTreeMap<String, T>,
    {
        let mut all = builtin();
        all.extend(self.read_file::<T>(category)?);
        Ok(all)
    }

    // ── save ────────────────────────────────────────────────────────────

    /// Save an axes preset, either from options or as a copy of another preset.
    pub fn save_axes(&self, name: &str, source: PresetSource) -> Result<()> {
        let options = match source {
            PresetSource::Options(m) => m,
            PresetSource::Named(other) => self.axes(&other)?,
        };
        self.save_entry(Category::Axes, name, options)
    }

    pub fn save_font(&self, name: &str, source: PresetSource) -> Result<()> {
        let options = match source {
            PresetSource::Options(m) => m,
            PresetSource::Named(other) => self.font(&other)?,
        };
        self.save_entry(Category::Font, name, options)
    }

    /// Save a palette, given either explicit colors or another palette's name.
    pub fn save_palette(&self, name: &str, palette: &PaletteSpec) -> Result<()> {
        let colors = self.palette_hex(palette)?;
        self.save_entry(Category::Palette, name, colors)
    }

    /// Save a palette given as hex strings, written as given once every entry
    /// has been validated.
    pub fn save_hex_palette<S: AsRef<str>>(&self, name: &str, colors: &[S]) -> Result<()> {
        parse_palette(colors)?;
        let colors: Vec<String> = colors.iter().map(|c| c.as_ref().to_string()).collect();
        self.save_entry(Category::Palette, name, colors)
    }

    fn save_entry<T>(&self, category: Category, name: &str, value: T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let path = self
            .path_for(category)
            .ok_or(StyleError::NoStoreDir(category))?;
        let mut table: BTreeMap<String, T> = self.read_file(category)?;
        table.insert(name.to_string(), value);
        write_table(&path, &table)?;
        log::debug!("saved {category} preset '{name}' to {}", path.display());
        Ok(())
    }

    fn read_file<T: DeserializeOwned>(&self, category: Category) -> Result<BTreeMap<String, T>> {
        match self.path_for(category) {
            Some(path) => read_table(&path),
            None => Ok(BTreeMap::new()),
        }
    }
}

/// Read a whole preset table. A missing file is an empty table.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<String, T>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(StyleError::io(path, e)),
    };
    if text.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let table = match StoreFormat::from_path(path) {
        StoreFormat::Json => serde_json::from_str(&text)?,
        StoreFormat::Yaml => serde_yaml::from_str(&text)?,
    };
    Ok(table)
}

fn write_table<T: Serialize>(path: &Path, table: &BTreeMap<String, T>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StyleError::io(parent, e))?;
    }
    let text = match StoreFormat::from_path(path) {
        StoreFormat::Json => serde_json::to_string_pretty(table)?,
        StoreFormat::Yaml => serde_yaml::to_string(table)?,
    };
    fs::write(path, text).map_err(|e| StyleError::io(path, e))
}
