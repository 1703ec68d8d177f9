use std::time::Instant;

use eframe::egui;

use crate::clock::{Clock, TICK};
use crate::config::Config;
use crate::state::AppState;
use crate::ui::{clock_face, coverage, panels, quote_card};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LiterwatchApp<C: Clock> {
    pub state: AppState,
    clock: C,
}

impl<C: Clock> LiterwatchApp<C> {
    /// Build the app and start loading the configured dataset.
    pub fn new(config: &Config, clock: C) -> Self {
        let mut state = AppState::new(config, clock.now());
        state.start_load(config.data_source.clone());
        Self { state, clock }
    }
}

impl<C: Clock> eframe::App for LiterwatchApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick(self.clock.now(), Instant::now());

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: attribution ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Central panel: clock and quote ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                clock_face::clock_face(ui, self.state.now);
                ui.add_space(24.0);
                quote_card::quote_card(ui, self.state.quote_view());
            });
        });

        coverage::coverage_window(ctx, &mut self.state);

        // One tick per second keeps the seconds display and the rotation moving.
        ctx.request_repaint_after(TICK);
    }
}
