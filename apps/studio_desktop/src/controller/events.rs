//! Intents raised by widgets and keys during a frame, applied once drawing is done.

use eframe::egui;
use studio_core::PageIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Tab(PageIndex),
    Previous,
    Next,
    ExploreProducts,
}

impl NavIntent {
    pub fn name(self) -> &'static str {
        match self {
            NavIntent::Tab(_) => "tab",
            NavIntent::Previous => "previous",
            NavIntent::Next => "next",
            NavIntent::ExploreProducts => "explore_products",
        }
    }

    /// Arrow keys step through pages, number keys jump to a tab.
    pub fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowLeft => Some(NavIntent::Previous),
            egui::Key::ArrowRight => Some(NavIntent::Next),
            egui::Key::Num1 => Some(NavIntent::Tab(PageIndex::WELCOME)),
            egui::Key::Num2 => Some(NavIntent::Tab(PageIndex::PRODUCTS)),
            egui::Key::Num3 => Some(NavIntent::Tab(PageIndex::CONTACT)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Twitter,
    LinkedIn,
    GitHub,
}

impl SocialLink {
    pub const ALL: [SocialLink; 3] = [SocialLink::Twitter, SocialLink::LinkedIn, SocialLink::GitHub];

    pub fn label(self) -> &'static str {
        match self {
            SocialLink::Twitter => "Twitter",
            SocialLink::LinkedIn => "LinkedIn",
            SocialLink::GitHub => "GitHub",
        }
    }

    /// Short glyph drawn inside the round icon button.
    pub fn glyph(self) -> &'static str {
        match self {
            SocialLink::Twitter => "X",
            SocialLink::LinkedIn => "in",
            SocialLink::GitHub => "GH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Navigate(NavIntent),
    ViewDetails { product: usize },
    Social(SocialLink),
}

impl From<NavIntent> for UiAction {
    fn from(value: NavIntent) -> Self {
        UiAction::Navigate(value)
    }
}

/// Key presses from this frame that map to navigation. Empty while a text field has focus.
pub fn key_intents(ctx: &egui::Context) -> Vec<NavIntent> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input(|input| {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } if modifiers.is_none() => NavIntent::from_key(*key),
                _ => None,
            })
            .collect()
    })
}
