//! Error type shared by preset lookup, preset storage and the drawing helpers.

use std::path::PathBuf;

use crate::presets::Category;

/// Errors produced by fishbowl.
///
/// Only [`StyleError::UnknownPreset`] can come out of the style registry itself.
/// The remaining variants come from the preset files and the image writers.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A named preset was not found in its table.
    #[error("unknown {category} preset '{name}'")]
    UnknownPreset { category: Category, name: String },

    /// A color string could not be parsed as `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// Saving was requested but no preset directory is configured.
    #[error("no preset directory configured, cannot save {0} presets")]
    NoStoreDir(Category),

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON preset file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed YAML preset file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("render error: {0}")]
    Render(String),
}

impl StyleError {
    pub(crate) fn unknown(category: Category, name: &str) -> Self {
        StyleError::UnknownPreset {
            category,
            name: name.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StyleError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_names_category_and_name() {
        let msg = StyleError::unknown(Category::Axes, "doesnotexist").to_string();
        assert!(msg.contains("axes"));
        assert!(msg.contains("doesnotexist"));
    }

    #[test]
    fn io_error_keeps_path() {
        let err = StyleError::io(
            "/nope/fishbowl.axes.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("fishbowl.axes.json"));
    }
}
