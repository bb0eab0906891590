use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Bar colours
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees, saturation and lightness in 0..=1)
/// to an opaque egui colour.
pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Fill colour for bars: the classic matplotlib blue (#1f77b4).
pub fn bar_fill() -> Color32 {
    from_hsl(205.0, 0.70, 0.41)
}

/// Outline for a bar, a darker shade of the fill.
pub fn bar_stroke() -> Color32 {
    from_hsl(205.0, 0.70, 0.28)
}
