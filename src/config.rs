//! Registry configuration: where presets are stored and what the defaults are.

use std::path::PathBuf;

use crate::defaults::plot_defaults;
use crate::presets::{PresetStore, StoreFormat};
use crate::value::StyleMap;

/// Environment variable naming the preset directory.
pub const PRESET_DIR_ENV: &str = "FISHBOWL_PRESET_DIR";
/// Environment variable selecting the preset file format (`json` or `yaml`).
pub const PRESET_FORMAT_ENV: &str = "FISHBOWL_PRESET_FORMAT";

/// Configuration for a [`StyleRegistry`](crate::StyleRegistry).
///
/// Without a preset directory only the built-in presets are available and
/// saving presets fails.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    pub preset_dir: Option<PathBuf>,
    pub store_format: StoreFormat,
    /// The default snapshot that `reset` restores.
    pub defaults: StyleMap,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            preset_dir: None,
            store_format: StoreFormat::Json,
            defaults: plot_defaults(),
        }
    }
}

impl RegistryConfig {
    /// Defaults, with the preset directory and format taken from
    /// `FISHBOWL_PRESET_DIR` / `FISHBOWL_PRESET_FORMAT` when set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(dir) = std::env::var_os(PRESET_DIR_ENV).filter(|d| !d.is_empty()) {
            cfg.preset_dir = Some(PathBuf::from(dir));
        }
        if let Ok(fmt) = std::env::var(PRESET_FORMAT_ENV) {
            match fmt.to_ascii_lowercase().as_str() {
                "yaml" | "yml" => cfg.store_format = StoreFormat::Yaml,
                "json" | "" => cfg.store_format = StoreFormat::Json,
                other => log::warn!("{PRESET_FORMAT_ENV}={other} not understood, using json"),
            }
        }
        cfg
    }

    pub fn with_preset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.preset_dir = Some(dir.into());
        self
    }

    pub fn with_store_format(mut self, format: StoreFormat) -> Self {
        self.store_format = format;
        self
    }

    pub fn with_defaults(mut self, defaults: StyleMap) -> Self {
        self.defaults = defaults;
        self
    }

    pub(crate) fn store(&self) -> PresetStore {
        match &self.preset_dir {
            Some(dir) => PresetStore::new(dir.clone(), self.store_format),
            None => PresetStore::builtin(),
        }
    }
}
