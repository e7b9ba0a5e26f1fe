//! Paints the entering and exiting page layers of a [`SlideFrame`].

use eframe::egui;
use studio_core::{Layer, Reveal, SlideFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    Entering,
    Exiting,
}

/// Paints both layers over `ui`'s remaining area. The exiting layer goes first so the
/// entering page ends up on top.
pub fn show_slide_frame(
    ui: &mut egui::Ui,
    frame: SlideFrame,
    mut add_page: impl FnMut(&mut egui::Ui, Layer, LayerRole),
) {
    let rect = ui.available_rect_before_wrap();
    let clip = rect.intersect(ui.clip_rect());

    if let Some(exiting) = frame.exiting {
        layer_ui(ui, rect, clip, exiting, |ui| {
            add_page(ui, exiting, LayerRole::Exiting)
        });
    }
    layer_ui(ui, rect, clip, frame.entering, |ui| {
        add_page(ui, frame.entering, LayerRole::Entering)
    });

    ui.allocate_rect(rect, egui::Sense::hover());
}

fn layer_ui(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    clip: egui::Rect,
    layer: Layer,
    add: impl FnOnce(&mut egui::Ui),
) {
    let layer_rect = rect.translate(egui::vec2(layer.x_offset, 0.0));
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .id_salt(("page_layer", layer.page.get()))
            .max_rect(layer_rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(clip);
    child.set_opacity(layer.opacity);
    add(&mut child);
}

/// Runs `add` faded and lowered by `reveal`.
pub fn revealed<R>(
    ui: &mut egui::Ui,
    reveal: Reveal,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.scope(|ui| {
        ui.multiply_opacity(reveal.opacity);
        if reveal.y_offset > 0.0 {
            ui.add_space(reveal.y_offset);
        }
        add(ui)
    })
    .inner
}
