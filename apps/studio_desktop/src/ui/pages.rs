//! Bodies of the three pages.

use eframe::egui;
use studio_core::{
    products,
    transition::{card_reveal_delay, reveal, HERO_REVEAL_DELAY},
    Page, Product, Reveal,
};

use crate::controller::events::{NavIntent, SocialLink, UiAction};
use crate::ui::{image_box::image_box, theme::Palette, transition::revealed};

const CONTENT_MAX_WIDTH: f32 = 960.0;
const WIDE_GRID_MIN_WIDTH: f32 = 720.0;

const STORY: [(&str, &str); 3] = [
    (
        "Our Story",
        "Founded in 2018, our design studio has been creating innovative and functional designs that \
         blend aesthetics with practicality. We believe that good design should enhance everyday life \
         while being accessible to everyone.",
    ),
    (
        "Past Projects",
        "We've worked with clients ranging from small startups to established brands, helping them \
         create unique design identities and functional products. Our portfolio includes furniture \
         design, interior concepts, and product development.",
    ),
    (
        "Technologies & Materials",
        "We utilize sustainable materials and cutting-edge manufacturing techniques to ensure our \
         designs are both environmentally responsible and built to last. From 3D printing prototypes \
         to working with local craftspeople, we embrace both traditional and modern approaches.",
    ),
];

pub struct PageContext<'a> {
    pub studio_name: &'a str,
    pub palette: Palette,
    /// Seconds since this page became active; `None` renders everything settled.
    pub elapsed: Option<f64>,
}

impl PageContext<'_> {
    fn reveal(&self, delay: f64) -> Reveal {
        match self.elapsed {
            Some(elapsed) => reveal(elapsed, delay),
            None => Reveal::SETTLED,
        }
    }
}

pub fn show_page(
    ui: &mut egui::Ui,
    page: Page,
    cx: &PageContext<'_>,
    actions: &mut Vec<UiAction>,
) {
    let hero_gap = (ui.available_height() * 0.2).max(24.0);
    egui::ScrollArea::vertical()
        .id_salt(("page_scroll", page.index().get()))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let side = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(16.0);
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(side.min(127.0) as i8, 32))
                .show(ui, |ui| match page {
                    Page::Welcome => welcome(ui, hero_gap, cx, actions),
                    Page::Products => products_grid(ui, cx, actions),
                    Page::Contact => contact(ui, cx, actions),
                });
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new(text).strong());
    });
    ui.add_space(32.0);
}

fn welcome(ui: &mut egui::Ui, gap: f32, cx: &PageContext<'_>, actions: &mut Vec<UiAction>) {
    let palette = cx.palette;
    ui.add_space(gap);

    revealed(ui, cx.reveal(HERO_REVEAL_DELAY), |ui| {
        ui.vertical_centered(|ui| {
            let heading = |color| egui::TextFormat {
                font_id: egui::FontId::proportional(44.0),
                color,
                ..Default::default()
            };
            let mut title = egui::text::LayoutJob::default();
            title.append("Welcome to ", 0.0, heading(palette.text));
            title.append(cx.studio_name, 0.0, heading(palette.primary));
            ui.label(title);
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new(
                    "We create beautiful, functional designs that enhance your everyday life. \
                     Explore our products and concepts to transform your space.",
                )
                .size(19.0)
                .color(palette.muted_text),
            );
            ui.add_space(28.0);

            let explore = egui::Button::new(
                egui::RichText::new("Explore Our Products")
                    .size(17.0)
                    .color(palette.on_primary),
            )
            .fill(palette.primary)
            .corner_radius(egui::CornerRadius::same(22))
            .min_size(egui::vec2(220.0, 44.0));
            if ui.add(explore).clicked() {
                actions.push(NavIntent::ExploreProducts.into());
            }
        });
    });
}

fn products_grid(ui: &mut egui::Ui, cx: &PageContext<'_>, actions: &mut Vec<UiAction>) {
    section_heading(ui, "Our Products");

    let lineup = products();
    if ui.available_width() >= WIDE_GRID_MIN_WIDTH {
        ui.columns(lineup.len(), |columns| {
            for (position, (column, product)) in columns.iter_mut().zip(lineup).enumerate() {
                product_card(column, position, product, cx, actions);
            }
        });
    } else {
        for (position, product) in lineup.iter().enumerate() {
            product_card(ui, position, product, cx, actions);
            ui.add_space(24.0);
        }
    }
}

fn product_card(
    ui: &mut egui::Ui,
    position: usize,
    product: &Product,
    cx: &PageContext<'_>,
    actions: &mut Vec<UiAction>,
) {
    let palette = cx.palette;
    revealed(ui, cx.reveal(card_reveal_delay(position)), |ui| {
        egui::Frame::new()
            .fill(palette.card)
            .stroke(egui::Stroke::new(1.0, palette.border))
            .corner_radius(egui::CornerRadius::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                image_box(ui, product.image_url, product.title, palette);

                egui::Frame::new()
                    .inner_margin(egui::Margin::same(20))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(product.title).size(20.0).strong());
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(product.description).color(palette.muted_text),
                        );
                        ui.add_space(14.0);
                        ui.label(
                            egui::RichText::new(product.price)
                                .size(18.0)
                                .strong()
                                .color(palette.primary),
                        );
                    });

                egui::Frame::new()
                    .fill(palette.card_footer)
                    .inner_margin(egui::Margin::symmetric(20, 12))
                    .show(ui, |ui| {
                        let details = egui::Button::new("View Details")
                            .stroke(egui::Stroke::new(1.0, palette.border))
                            .min_size(egui::vec2(ui.available_width(), 34.0));
                        if ui.add(details).clicked() {
                            actions.push(UiAction::ViewDetails { product: position });
                        }
                    });
            });
    });
}

fn contact(ui: &mut egui::Ui, cx: &PageContext<'_>, actions: &mut Vec<UiAction>) {
    let palette = cx.palette;
    section_heading(ui, "Contact Us");

    egui::Frame::new()
        .fill(palette.muted_panel)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for (position, (title, body)) in STORY.iter().enumerate() {
                if position > 0 {
                    ui.add_space(24.0);
                }
                ui.label(egui::RichText::new(*title).size(24.0).strong());
                ui.add_space(12.0);
                ui.label(egui::RichText::new(*body).color(palette.muted_text));
            }
        });

    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        let width = SocialLink::ALL.len() as f32 * 48.0 + 2.0 * 24.0;
        ui.allocate_ui_with_layout(
            egui::vec2(width, 48.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                ui.spacing_mut().item_spacing.x = 24.0;
                for link in SocialLink::ALL {
                    let button = egui::Button::new(egui::RichText::new(link.glyph()).strong())
                        .fill(egui::Color32::TRANSPARENT)
                        .stroke(egui::Stroke::new(1.0, palette.border))
                        .corner_radius(egui::CornerRadius::same(24))
                        .min_size(egui::vec2(48.0, 48.0));
                    if ui.add(button).on_hover_text(link.label()).clicked() {
                        actions.push(UiAction::Social(link));
                    }
                }
            },
        );
    });
}

pub fn footer_text(studio_name: &str, year: i32) -> String {
    format!("© {year} {studio_name}. All rights reserved. Created with ♥ by Creative Team.")
}
