pub mod app;
pub mod clock;
pub mod color;
pub mod config;
pub mod data;
pub mod rotation;
pub mod selector;
pub mod state;
pub mod ui;
