//! Example: Preview every built-in palette
//!
//! What it demonstrates
//! - Looking up palettes by name through the registry's preset store.
//! - Rendering a swatch grid with `draw_box_palette` and sine previews with `draw_sin_palette`.
//! - Sampling the registered colormaps into gradient rows.
//!
//! How to run
//! ```bash
//! RUST_LOG=debug cargo run --example palettes -- out_dir
//! ```
//! Writes `palettes.png` plus one `<name>_sin.png` per palette into `out_dir`
//! (the current directory when omitted).

use std::path::PathBuf;

use fishbowl::{
    draw_box_palette, draw_sin_palette, BoxPaletteOptions, Category, PaletteSpec,
    SinPaletteOptions, StyleRegistry,
};

fn main() -> fishbowl::Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).map_err(|e| fishbowl::StyleError::Io {
        path: out_dir.clone(),
        source: e,
    })?;

    let registry = StyleRegistry::new();
    let store = registry.store();
    let mut rows = Vec::new();
    for name in store.names(Category::Palette)? {
        let colors = store.palette_colors(&PaletteSpec::from(name.as_str()))?;
        draw_sin_palette(
            &colors,
            &SinPaletteOptions {
                background: Some(egui::Color32::WHITE),
                save_to: Some(out_dir.join(format!("{name}_sin.png"))),
                ..Default::default()
            },
        )?;
        println!("{name}: {} colors", colors.len());
        rows.push(colors);
    }

    // colormaps as 16-step gradients below the palettes
    for name in registry.colormaps().names() {
        let cmap = registry.colormaps().get(&name)?;
        rows.push((0..16).map(|i| cmap.sample(i as f32 / 15.0)).collect());
        println!("{name}: colormap");
    }

    draw_box_palette(
        &rows,
        &BoxPaletteOptions {
            block: 24,
            save_to: Some(out_dir.join("palettes.png")),
            ..Default::default()
        },
    )?;
    println!("wrote previews to {}", out_dir.display());
    Ok(())
}
