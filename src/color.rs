use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Time-of-day colours
// ---------------------------------------------------------------------------

/// A colour for an hour of the day: the hue walks once round the wheel,
/// and night hours are darker than midday ones.
pub fn hour_color(hour: usize) -> Color32 {
    let hour = (hour % 24) as f32;
    let hue = hour / 24.0 * 360.0;
    // 0 at midnight, 1 at noon
    let daylight = (1.0 - (hour * std::f32::consts::PI / 12.0).cos()) / 2.0;
    let lightness = 0.35 + 0.25 * daylight;
    let rgb: Srgb = Hsl::new(hue, 0.65, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// All 24 hour colours, midnight first.
pub fn hour_palette() -> Vec<Color32> {
    (0..24).map(hour_color).collect()
}

/// Tint for the line under a quote telling whether it is an exact match.
pub fn match_color(exact: bool) -> Color32 {
    if exact {
        Color32::from_rgb(0x7F, 0xB0, 0x69)
    } else {
        Color32::from_rgb(0xD9, 0xA4, 0x41)
    }
}
