//! Applies queued UI actions to the page controller and the slide transition.

use studio_core::{products, Navigation, PageIndex, SlideTransition, ViewController};

use crate::controller::events::{NavIntent, UiAction};

pub fn dispatch_nav_intent(
    controller: &mut ViewController,
    transition: &mut SlideTransition,
    intent: NavIntent,
    now: f64,
) -> Option<Navigation> {
    let navigation = match intent {
        NavIntent::Tab(page) => controller.go_to_page(page),
        NavIntent::ExploreProducts => controller.go_to_page(PageIndex::PRODUCTS),
        NavIntent::Previous => controller.prev(),
        NavIntent::Next => controller.next(),
    };

    match navigation {
        Some(navigation) => transition.begin(navigation, now),
        None => tracing::trace!(
            intent = intent.name(),
            page = %controller.current_page(),
            "navigation left page unchanged"
        ),
    }

    navigation
}

/// Runs every queued action in order; returns the last effective navigation, if any.
pub fn dispatch_ui_actions(
    controller: &mut ViewController,
    transition: &mut SlideTransition,
    actions: impl IntoIterator<Item = UiAction>,
    now: f64,
) -> Option<Navigation> {
    let mut last = None;
    for action in actions {
        match action {
            UiAction::Navigate(intent) => {
                if let Some(navigation) = dispatch_nav_intent(controller, transition, intent, now) {
                    last = Some(navigation);
                }
            }
            UiAction::ViewDetails { product } => {
                let title = products().get(product).map(|p| p.title).unwrap_or("unknown");
                tracing::debug!(product, title, "view details requested");
            }
            UiAction::Social(link) => {
                tracing::debug!(link = link.label(), "social link clicked");
            }
        }
    }
    last
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
