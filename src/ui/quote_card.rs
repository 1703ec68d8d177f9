use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::match_color;
use crate::selector::{Match, Selection};
use crate::state::{
    QuoteView, LOADING_MESSAGE, LOAD_ERROR_MESSAGE, NO_QUOTE_HINT, NO_QUOTE_MESSAGE,
};

// ---------------------------------------------------------------------------
// Quote area (central panel, under the clock)
// ---------------------------------------------------------------------------

pub fn quote_card(ui: &mut Ui, view: QuoteView<'_>) {
    match view {
        QuoteView::Loading => {
            ui.label(RichText::new(LOADING_MESSAGE).italics().weak());
        }
        QuoteView::Failed => {
            ui.label(RichText::new(LOAD_ERROR_MESSAGE).color(Color32::RED));
        }
        QuoteView::Missing => {
            ui.label(RichText::new(NO_QUOTE_MESSAGE).size(18.0));
            ui.label(RichText::new(NO_QUOTE_HINT).weak());
        }
        QuoteView::Showing(selection) => showing(ui, selection),
    }
}

fn showing(ui: &mut Ui, selection: &Selection) {
    let quote = &selection.quote;
    let max_width = (ui.available_width() * 0.8).min(720.0);

    ui.scope(|ui: &mut Ui| {
        ui.set_max_width(max_width);
        ui.label(RichText::new("\u{201C}").size(48.0).weak());
        ui.add(egui::Label::new(RichText::new(&quote.text).size(20.0)).wrap());
        ui.label(RichText::new("\u{201D}").size(48.0).weak());
    });

    ui.add_space(12.0);
    ui.label(RichText::new(&quote.title).strong());
    ui.label(RichText::new(format!("by {}", quote.author)).italics());

    let note = match selection.matched {
        Match::Exact => "this very minute".to_string(),
        Match::Nearest(key) => format!("nearest passage: {key}"),
    };
    ui.add_space(6.0);
    ui.label(
        RichText::new(note)
            .small()
            .color(match_color(selection.is_exact())),
    );
}
