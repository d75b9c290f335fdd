use eframe::egui::Color32;

// Theme palette, one fixed color per category index (cyan, indigo, pink,
// emerald), matching the accent colors used across the page.
pub(super) const CATEGORY_PALETTE: [Color32; 4] = [
    Color32::from_rgb(0x22, 0xd3, 0xee),
    Color32::from_rgb(0x81, 0x8c, 0xf8),
    Color32::from_rgb(0xf4, 0x72, 0xb6),
    Color32::from_rgb(0x34, 0xd3, 0x99),
];

pub(super) const ACCENT_COLOR: Color32 = Color32::from_rgb(0x22, 0xd3, 0xee);
pub(super) const TEXT_COLOR: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1);
pub(super) const MUTED_COLOR: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
pub(super) const FAINT_COLOR: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b);
pub(super) const LINE_COLOR: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
pub(super) const CANVAS_COLOR: Color32 = Color32::from_rgb(0x0b, 0x0f, 0x19);

/// Fades a color toward fully transparent. `Color32` is premultiplied, so
/// every channel scales together with the alpha.
pub(super) fn fade(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use eframe::egui::Color32;

    use super::fade;

    #[test]
    fn fade_scales_premultiplied_channels() {
        let color = Color32::from_rgb(10, 20, 30);
        assert_eq!(fade(color, 1.0), color);
        assert_eq!(fade(color, 0.0), Color32::TRANSPARENT);

        let faded = fade(color, 0.5);
        assert_eq!(faded.a(), 128);
        assert_eq!((faded.r(), faded.g(), faded.b()), (5, 10, 15));

        // Out-of-range opacities clamp instead of overflowing.
        assert_eq!(fade(color, 2.0), color);
        assert_eq!(fade(color, -1.0), Color32::TRANSPARENT);
    }
}
