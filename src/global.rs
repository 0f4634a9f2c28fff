//! Process-wide convenience API over a shared [`StyleRegistry`].
//!
//! Most applications have exactly one plot style in effect, so these free
//! functions operate on a lazily created registry configured from the
//! environment (see [`RegistryConfig::from_env`]). Code that wants several
//! independent styles should own a [`StyleRegistry`] instead.
//!
//! ```no_run
//! use fishbowl::StyleRequest;
//!
//! fishbowl::set_style(StyleRequest::house()).unwrap();
//! {
//!     let _scoped = fishbowl::style(StyleRequest::new().palette("gourami")).unwrap();
//!     // plots created here use the gourami cycle
//! }
//! fishbowl::reset_style();
//! ```

use std::sync::{Mutex, MutexGuard};

use egui::Color32;
use once_cell::sync::Lazy;

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::registry::{StyleRegistry, StyleRequest};
use crate::value::StyleMap;

static REGISTRY: Lazy<Mutex<StyleRegistry>> =
    Lazy::new(|| Mutex::new(StyleRegistry::with_config(RegistryConfig::from_env())));

// A panic inside a scoped style must not make the registry unusable for the
// restore that follows it.
fn registry() -> MutexGuard<'static, StyleRegistry> {
    REGISTRY.lock().unwrap_or_else(|e| e.into_inner())
}

/// Run `f` with exclusive access to the process-wide registry.
///
/// Do not call the other free functions from inside `f`; the lock is not
/// reentrant.
pub fn with_registry<R>(f: impl FnOnce(&mut StyleRegistry) -> R) -> R {
    let mut reg = registry();
    f(&mut *reg)
}

/// Apply a style request globally.
pub fn set_style(request: StyleRequest) -> Result<()> {
    registry().set(request)
}

/// Restore the default snapshot globally.
pub fn reset_style() {
    registry().reset();
}

/// A copy of the current global style.
pub fn get_style() -> StyleMap {
    registry().get_style()
}

/// Apply a style request globally until the returned guard is dropped.
pub fn style(request: StyleRequest) -> Result<GlobalStyleGuard> {
    let mut reg = registry();
    let snapshot = reg.get_style();
    reg.set(request)?;
    Ok(GlobalStyleGuard {
        snapshot: Some(snapshot),
    })
}

/// Save a palette to the global registry's preset store.
pub fn save_palette(name: &str, colors: &[Color32]) -> Result<()> {
    registry().save_palette(name, colors)
}

/// Guard returned by [`style`]. The lock is only taken when the guard is
/// created and dropped, so the global functions stay usable inside the scope.
#[must_use = "the style is restored as soon as the guard is dropped"]
pub struct GlobalStyleGuard {
    snapshot: Option<StyleMap>,
}

impl Drop for GlobalStyleGuard {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            registry().apply(snapshot);
        }
    }
}
