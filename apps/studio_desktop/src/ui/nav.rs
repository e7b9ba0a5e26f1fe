//! Tab bar and prev/next arrows.

use eframe::egui;
use studio_core::{TabState, ViewController, PAGE_COUNT};

use crate::controller::events::{NavIntent, UiAction};
use crate::ui::theme::Palette;

const ARROW_SIZE: f32 = 48.0;

fn pill_button(label: &str, selected: bool, palette: Palette) -> egui::Button<'static> {
    let (text, fill, stroke) = if selected {
        (palette.on_primary, palette.primary, egui::Stroke::NONE)
    } else {
        (
            palette.text,
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(1.0, palette.border),
        )
    };

    egui::Button::new(egui::RichText::new(label.to_owned()).color(text))
        .fill(fill)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(16))
        .min_size(egui::vec2(96.0, 32.0))
        .selected(selected)
}

pub fn tab_bar(
    ui: &mut egui::Ui,
    tabs: [TabState; PAGE_COUNT],
    palette: Palette,
    actions: &mut Vec<UiAction>,
) {
    let spacing = ui.spacing().item_spacing.x * 2.0;
    let row_width = tabs.len() as f32 * 96.0 + (tabs.len() - 1) as f32 * spacing;
    let lead = ((ui.available_width() - row_width) / 2.0).max(0.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = spacing;
        ui.add_space(lead);
        for tab in tabs {
            if ui
                .add(pill_button(tab.page.label(), tab.selected, palette))
                .clicked()
            {
                actions.push(NavIntent::Tab(tab.page.index()).into());
            }
        }
    });
}

fn arrow_button(glyph: &str, palette: Palette) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(glyph.to_owned())
            .size(22.0)
            .color(palette.text),
    )
    .fill(palette.background.gamma_multiply(0.8))
    .stroke(egui::Stroke::new(1.0, palette.border))
    .corner_radius(egui::CornerRadius::same(24))
    .min_size(egui::vec2(ARROW_SIZE, ARROW_SIZE))
}

/// Arrows floating over the bottom corners of `area`. Each is disabled at its boundary.
pub fn page_arrows(
    ctx: &egui::Context,
    area: egui::Rect,
    controller: &ViewController,
    palette: Palette,
    actions: &mut Vec<UiAction>,
) {
    let inset = 24.0;
    let lift = egui::vec2(0.0, -inset - ARROW_SIZE);
    let arrows = [
        (
            "prev_arrow",
            "‹",
            "Previous",
            controller.prev_enabled(),
            NavIntent::Previous,
            area.left_bottom() + lift + egui::vec2(inset, 0.0),
        ),
        (
            "next_arrow",
            "›",
            "Next",
            controller.next_enabled(),
            NavIntent::Next,
            area.right_bottom() + lift - egui::vec2(inset + ARROW_SIZE, 0.0),
        ),
    ];

    for (id, glyph, label, enabled, intent, pos) in arrows {
        egui::Area::new(egui::Id::new(id))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                let response = ui
                    .add_enabled(enabled, arrow_button(glyph, palette))
                    .on_hover_text(label);
                if response.clicked() {
                    actions.push(intent.into());
                }
            });
    }
}
