use std::collections::BTreeMap;

use eframe::egui;

use crate::config::ThemeChoice;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Surfaces:
    pub background: egui::Color32,
    pub header: egui::Color32,
    pub muted_panel: egui::Color32,
    pub card: egui::Color32,
    pub card_footer: egui::Color32,
    pub image_fill: egui::Color32,

    // Text:
    pub text: egui::Color32,
    pub muted_text: egui::Color32,
    pub on_primary: egui::Color32,

    // Accents:
    pub primary: egui::Color32,
    pub border: egui::Color32,
}

pub fn palette_for(theme: ThemeChoice) -> Palette {
    match theme {
        ThemeChoice::Light => Palette {
            background: egui::Color32::from_rgb(255, 255, 255),
            header: egui::Color32::from_rgb(255, 255, 255),
            muted_panel: egui::Color32::from_rgb(241, 245, 249),
            card: egui::Color32::from_rgb(255, 255, 255),
            card_footer: egui::Color32::from_rgb(248, 250, 252),
            image_fill: egui::Color32::from_rgb(226, 232, 240),
            text: egui::Color32::from_rgb(15, 23, 42),
            muted_text: egui::Color32::from_rgb(100, 116, 139),
            on_primary: egui::Color32::from_rgb(248, 250, 252),
            primary: egui::Color32::from_rgb(15, 23, 42),
            border: egui::Color32::from_rgb(226, 232, 240),
        },
        ThemeChoice::Dark => Palette {
            background: egui::Color32::from_rgb(2, 8, 23),
            header: egui::Color32::from_rgb(9, 14, 30),
            muted_panel: egui::Color32::from_rgb(30, 41, 59),
            card: egui::Color32::from_rgb(15, 23, 42),
            card_footer: egui::Color32::from_rgb(22, 31, 51),
            image_fill: egui::Color32::from_rgb(51, 65, 85),
            text: egui::Color32::from_rgb(248, 250, 252),
            muted_text: egui::Color32::from_rgb(148, 163, 184),
            on_primary: egui::Color32::from_rgb(15, 23, 42),
            primary: egui::Color32::from_rgb(248, 250, 252),
            border: egui::Color32::from_rgb(30, 41, 59),
        },
    }
}

pub fn visuals_for_theme(theme: ThemeChoice) -> egui::Visuals {
    let palette = palette_for(theme);
    let mut visuals = match theme {
        ThemeChoice::Light => egui::Visuals::light(),
        ThemeChoice::Dark => egui::Visuals::dark(),
    };

    visuals.override_text_color = Some(palette.text);
    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = palette.muted_panel;
    visuals.extreme_bg_color = palette.card_footer;
    visuals.selection.bg_fill = palette.primary;
    visuals.hyperlink_color = palette.primary;

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.border);
    visuals.widgets.inactive.bg_fill = palette.card;
    visuals.widgets.inactive.weak_bg_fill = palette.card;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.border);
    visuals.widgets.hovered.weak_bg_fill = palette.muted_panel;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.muted_text);
    visuals.widgets.active.weak_bg_fill = palette.image_fill;

    let rounding = egui::CornerRadius::same(8);
    visuals.widgets.inactive.corner_radius = rounding;
    visuals.widgets.hovered.corner_radius = rounding;
    visuals.widgets.active.corner_radius = rounding;
    visuals.window_corner_radius = egui::CornerRadius::same(12);

    visuals
}

/// Larger headings than egui's defaults; body text stays readable at marketing sizes.
pub fn text_styles() -> BTreeMap<egui::TextStyle, egui::FontId> {
    use egui::{FontFamily, FontId, TextStyle};

    let mut styles = egui::Style::default().text_styles;
    styles.insert(TextStyle::Heading, FontId::new(30.0, FontFamily::Proportional));
    styles.insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
    styles.insert(TextStyle::Button, FontId::new(15.0, FontFamily::Proportional));
    styles.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    styles
}
