use eframe::egui::{self, Grid, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::hour_palette;
use crate::data::coverage::Coverage;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Coverage window
// ---------------------------------------------------------------------------

/// Floating window with dataset statistics; toggled from the View menu.
pub fn coverage_window(ctx: &egui::Context, state: &mut AppState) {
    let coverage = state.coverage.as_ref();
    egui::Window::new("Coverage")
        .open(&mut state.show_coverage)
        .default_width(520.0)
        .show(ctx, |ui: &mut Ui| match coverage {
            Some(cov) => {
                summary(ui, cov);
                ui.separator();
                hourly_chart(ui, cov);
            }
            None => {
                ui.label("No dataset loaded.");
            }
        });
}

fn summary(ui: &mut Ui, cov: &Coverage) {
    Grid::new("coverage_summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("Minutes covered");
            ui.label(format!("{} / 1440 ({:.1}%)", cov.covered, cov.percent()));
            ui.end_row();

            ui.label("Minutes missing");
            ui.label(cov.missing().to_string());
            ui.end_row();

            ui.label("Quotes");
            ui.label(cov.total_quotes.to_string());
            ui.end_row();

            if let Some(mean) = cov.mean_quotes() {
                ui.label("Quotes per minute");
                ui.label(format!(
                    "mean {mean:.1}, median {}, min {}, max {}",
                    cov.median_quotes.unwrap_or_default(),
                    cov.min_quotes.unwrap_or_default(),
                    cov.max_quotes.unwrap_or_default()
                ));
                ui.end_row();
            }
        });
}

fn hourly_chart(ui: &mut Ui, cov: &Coverage) {
    let colors = hour_palette();
    let bars: Vec<Bar> = cov
        .per_hour
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(hour, (&count, color))| {
            Bar::new(hour as f64, count as f64)
                .name(format!("{hour:02}h"))
                .fill(color)
                .width(0.8)
        })
        .collect();

    Plot::new("coverage_plot")
        .height(220.0)
        .x_axis_label("Hour")
        .y_axis_label("Minutes covered")
        .include_y(60.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Minutes covered"));
        });
}
