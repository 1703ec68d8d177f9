use eframe::egui::{self, RichText, Ui};

use crate::data::loader::DataSource;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui
                .add_enabled(!state.loading, egui::Button::new("Open…"))
                .clicked()
            {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui: &mut Ui| {
            if ui.checkbox(&mut state.show_coverage, "Coverage").clicked() {
                ui.close_menu();
            }
        });

        ui.separator();
        ui.heading("Literwatch");
        ui.separator();

        if state.loading {
            ui.spinner();
        } else if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} quotes across {} minutes",
                ds.quote_count(),
                ds.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Quotations from Project Gutenberg").small().weak());
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open time quotes")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.start_load(DataSource::File(path));
    }
}
