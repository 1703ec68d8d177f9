use clap::Parser;
use eframe::egui;

use literwatch::app::LiterwatchApp;
use literwatch::clock::SystemClock;
use literwatch::config::{Args, Config};

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from(Args::parse());
    log::debug!("Starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Literwatch",
        options,
        Box::new(move |_cc| Ok(Box::new(LiterwatchApp::new(&config, SystemClock)))),
    )
}
