use chrono::Datelike;
use eframe::egui;
use studio_core::{
    transition::{card_reveal_delay, reveal_done},
    Page, PageIndex, SlideTransition, ViewController,
};

use crate::config::{Settings, ThemeChoice};
use crate::controller::events::{key_intents, UiAction};
use crate::controller::orchestration::dispatch_ui_actions;
use crate::ui::{
    nav::{page_arrows, tab_bar},
    pages::{footer_text, show_page, PageContext},
    theme::{palette_for, text_styles, visuals_for_theme, Palette},
    transition::{show_slide_frame, LayerRole},
};

pub struct StudioApp {
    controller: ViewController,
    transition: SlideTransition,
    theme: ThemeChoice,
    applied_theme: Option<ThemeChoice>,
    studio_name: String,
    /// Clock value at which the active page was shown; drives content reveals.
    page_shown_at: Option<f64>,
    actions: Vec<UiAction>,
}

impl StudioApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            controller: ViewController::new(),
            transition: SlideTransition::new(settings.motion()),
            theme: settings.theme,
            applied_theme: None,
            studio_name: settings.studio_name.clone(),
            page_shown_at: None,
            actions: Vec::new(),
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = text_styles();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(14.0, 6.0);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    /// Draws one frame and applies whatever the user clicked or pressed during it.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|input| input.time);
        let page_shown_at = *self.page_shown_at.get_or_insert(now);
        let palette = palette_for(self.theme);

        self.apply_theme_if_needed(ctx);
        self.actions
            .extend(key_intents(ctx).into_iter().map(UiAction::from));

        egui::TopBottomPanel::top("tab_bar")
            .frame(
                egui::Frame::new()
                    .fill(palette.header)
                    .inner_margin(egui::Margin::symmetric(16, 14))
                    .stroke(egui::Stroke::new(1.0, palette.border)),
            )
            .show(ctx, |ui| {
                tab_bar(ui, self.controller.tabs(), palette, &mut self.actions);
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(palette.muted_panel.gamma_multiply(0.5))
                    .inner_margin(egui::Margin::symmetric(16, 18))
                    .stroke(egui::Stroke::new(1.0, palette.border)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let year = chrono::Local::now().year();
                    ui.label(
                        egui::RichText::new(footer_text(&self.studio_name, year))
                            .small()
                            .color(palette.muted_text),
                    );
                });
            });

        let main_rect = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                self.show_pages(ui, palette, now - page_shown_at);
                ui.max_rect()
            })
            .inner;

        page_arrows(ctx, main_rect, &self.controller, palette, &mut self.actions);

        // A discarded pass still owns this frame's input; its rerun sees no events.
        let actions = std::mem::take(&mut self.actions);
        if dispatch_ui_actions(&mut self.controller, &mut self.transition, actions, now).is_some() {
            self.page_shown_at = Some(now);
            ctx.request_repaint();
        }

        if self.is_animating(now) {
            ctx.request_repaint();
        }
    }

    fn show_pages(&mut self, ui: &mut egui::Ui, palette: Palette, elapsed: f64) {
        let motion = self.transition.motion().enabled;
        let frame = self
            .transition
            .frame(self.controller.current_page(), ui.ctx().input(|i| i.time));
        let studio_name = self.studio_name.as_str();
        let actions = &mut self.actions;
        // Widgets on the page sliding out stay drawn but their clicks go nowhere.
        let mut discarded = Vec::new();

        show_slide_frame(ui, frame, |ui, layer, role| {
            let cx = PageContext {
                studio_name,
                palette,
                elapsed: (motion && role == LayerRole::Entering).then_some(elapsed),
            };
            let sink = match role {
                LayerRole::Entering => &mut *actions,
                LayerRole::Exiting => &mut discarded,
            };
            show_page(ui, Page::from(layer.page), &cx, sink);
        });
    }

    fn is_animating(&self, now: f64) -> bool {
        if self.transition.is_animating(now) {
            return true;
        }
        if !self.transition.motion().enabled {
            return false;
        }
        let Some(delay) = last_reveal_delay(self.controller.current_page()) else {
            return false;
        };
        let elapsed = self.page_shown_at.map_or(0.0, |shown| now - shown);
        !reveal_done(elapsed, delay)
    }
}

/// Delay of the last content block that fades in on `page`, if any does.
fn last_reveal_delay(page: PageIndex) -> Option<f64> {
    match Page::from(page) {
        Page::Products => Some(card_reveal_delay(
            studio_core::products().len().saturating_sub(1),
        )),
        Page::Welcome => Some(studio_core::transition::HERO_REVEAL_DELAY),
        Page::Contact => None,
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
