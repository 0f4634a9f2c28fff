//! Example: Switching plot styles at runtime
//!
//! What it demonstrates
//! - Attaching a `StyleRegistry` to the egui context so font presets reach the UI.
//! - Building plots and lines from the registry's `PlotConfig`.
//! - A scoped style (`StyleRegistry::style`) for a single inset plot.
//!
//! How to run
//! ```bash
//! cargo run --example styled_plot
//! ```
//! Pick axes, palette and font presets from the top bar; the main plot follows
//! the selection while the inset always uses the classic axes.

use eframe::{egui, NativeOptions};
use fishbowl::{Category, StyleRegistry, StyleRequest};

const N_WAVES: usize = 6;

struct StyledPlotApp {
    registry: StyleRegistry,
    axes: String,
    palette: String,
    font: String,
    error: Option<String>,
}

impl StyledPlotApp {
    fn new(ctx: &egui::Context) -> Self {
        let mut registry = StyleRegistry::new();
        registry.attach_context(ctx);
        let mut app = Self {
            registry,
            axes: "minimal".into(),
            palette: "goldfish".into(),
            font: "proportional".into(),
            error: None,
        };
        app.restyle();
        app
    }

    fn restyle(&mut self) {
        let request = StyleRequest::new()
            .axes(self.axes.as_str())
            .palette(self.palette.as_str())
            .font(self.font.as_str());
        self.error = self.registry.set(request).err().map(|e| e.to_string());
    }

    fn waves(index: usize) -> Vec<[f64; 2]> {
        let phase = index as f64 * 0.5;
        let amp = (N_WAVES - index) as f64;
        (0..200)
            .map(|i| {
                let x = -5.0 + i as f64 * 0.05;
                [x, (x + phase).sin() * amp]
            })
            .collect()
    }

    fn draw(registry: &StyleRegistry, ui: &mut egui::Ui, id: &str) {
        let config = registry.plot_config();
        config.plot(id).show(ui, |plot_ui| {
            for k in 0..N_WAVES {
                plot_ui.line(config.line(k, format!("wave {k}"), Self::waves(k)));
            }
        });
    }
}

fn combo(ui: &mut egui::Ui, label: &str, names: &[String], current: &mut String) -> bool {
    let mut changed = false;
    egui::ComboBox::from_label(label)
        .selected_text(current.as_str())
        .show_ui(ui, |ui| {
            for name in names {
                changed |= ui
                    .selectable_value(current, name.clone(), name.as_str())
                    .changed();
            }
        });
    changed
}

impl eframe::App for StyledPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let names = |category| self.registry.store().names(category).unwrap_or_default();
        let (axes_names, palette_names, font_names) =
            (names(Category::Axes), names(Category::Palette), names(Category::Font));

        egui::TopBottomPanel::top("style_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut changed = combo(ui, "axes", &axes_names, &mut self.axes);
                changed |= combo(ui, "palette", &palette_names, &mut self.palette);
                changed |= combo(ui, "font", &font_names, &mut self.font);
                if ui.button("Reset").clicked() {
                    self.registry.reset();
                }
                if changed {
                    self.restyle();
                }
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        });

        egui::SidePanel::right("inset").show(ctx, |ui| {
            ui.label("classic inset");
            let inset = self
                .registry
                .with_style(StyleRequest::new().axes("classic"), |reg| {
                    Self::draw(reg, ui, "inset_plot")
                });
            if let Err(e) = inset {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Self::draw(&self.registry, ui, "main_plot");
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "fishbowl styled plot",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(StyledPlotApp::new(&cc.egui_ctx)))),
    )
}
