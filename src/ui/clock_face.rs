use chrono::NaiveTime;
use eframe::egui::{RichText, Ui};

use crate::clock::ClockReading;

/// Big `HH:MM:SS` readout; the seconds are dimmed.
pub fn clock_face(ui: &mut Ui, now: NaiveTime) {
    let reading = ClockReading::of(&now);
    ui.horizontal(|ui: &mut Ui| {
        // Centre the row by hand; horizontal layouts start at the left edge.
        let width = 330.0;
        ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
        ui.label(
            RichText::new(format!("{:02}:{:02}", reading.hours, reading.minutes))
                .monospace()
                .size(72.0)
                .strong(),
        );
        ui.label(
            RichText::new(format!(":{:02}", reading.seconds))
                .monospace()
                .size(40.0)
                .weak(),
        );
    });
}
