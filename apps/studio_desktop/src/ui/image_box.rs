use eframe::egui;
use studio_core::PlaceholderImage;

use crate::ui::theme::Palette;

/// Height of a product card's image header.
pub const MAX_IMAGE_HEIGHT: f32 = 192.0;

/// Draws the sized placeholder box for `url`, labelled with `alt`.
pub fn image_box(ui: &mut egui::Ui, url: &str, alt: &str, palette: Palette) -> egui::Response {
    let image = PlaceholderImage::parse_or_default(url);
    let (width, height) = image.fit(ui.available_width(), MAX_IMAGE_HEIGHT);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let fill = if response.hovered() {
            palette.image_fill.gamma_multiply(0.9)
        } else {
            palette.image_fill
        };
        painter.rect_filled(rect, egui::CornerRadius::same(8), fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            alt,
            egui::FontId::proportional(15.0),
            palette.muted_text,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 20.0),
            egui::Align2::CENTER_CENTER,
            format!("{} × {}", image.width, image.height),
            egui::FontId::proportional(11.0),
            palette.muted_text.gamma_multiply(0.8),
        );
    }

    response.on_hover_text(alt)
}
