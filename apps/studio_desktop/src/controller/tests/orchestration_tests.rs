use super::*;

use studio_core::Direction;

use crate::controller::events::SocialLink;

fn fresh() -> (ViewController, SlideTransition) {
    (ViewController::new(), SlideTransition::default())
}

#[test]
fn tab_then_previous_arrow_scenario() {
    let (mut controller, mut transition) = fresh();
    assert!(!controller.prev_enabled());
    assert!(controller.next_enabled());

    let navigation = dispatch_nav_intent(
        &mut controller,
        &mut transition,
        NavIntent::Tab(PageIndex::PRODUCTS),
        1.0,
    )
    .expect("tab click navigates");
    assert_eq!(navigation.direction, Direction::Forward);
    assert_eq!(controller.current_page(), PageIndex::PRODUCTS);
    assert!(controller.prev_enabled() && controller.next_enabled());
    assert!(transition.is_animating(1.1));

    dispatch_nav_intent(&mut controller, &mut transition, NavIntent::Previous, 2.0);
    assert_eq!(controller.current_page(), PageIndex::WELCOME);
    assert_eq!(controller.direction(), Direction::Backward);
    assert!(!controller.prev_enabled());
}

#[test]
fn explore_button_opens_products() {
    let (mut controller, mut transition) = fresh();
    dispatch_nav_intent(&mut controller, &mut transition, NavIntent::ExploreProducts, 0.0);
    assert_eq!(controller.current_page(), PageIndex::PRODUCTS);
}

#[test]
fn no_op_intents_do_not_start_a_slide() {
    let (mut controller, mut transition) = fresh();
    assert_eq!(
        dispatch_nav_intent(&mut controller, &mut transition, NavIntent::Previous, 0.0),
        None
    );
    assert_eq!(
        dispatch_nav_intent(
            &mut controller,
            &mut transition,
            NavIntent::Tab(PageIndex::WELCOME),
            0.0
        ),
        None
    );
    assert!(!transition.is_animating(0.0));
}

#[test]
fn queued_actions_apply_in_order() {
    let (mut controller, mut transition) = fresh();
    let last = dispatch_ui_actions(
        &mut controller,
        &mut transition,
        [
            UiAction::Navigate(NavIntent::Next),
            UiAction::ViewDetails { product: 1 },
            UiAction::Navigate(NavIntent::Next),
            UiAction::Social(SocialLink::GitHub),
            UiAction::Navigate(NavIntent::Next),
        ],
        0.0,
    );

    assert_eq!(controller.current_page(), PageIndex::CONTACT);
    assert_eq!(
        last.map(|navigation| (navigation.from, navigation.to)),
        Some((PageIndex::PRODUCTS, PageIndex::CONTACT))
    );
    let frame = transition.frame(PageIndex::CONTACT, 0.0);
    assert_eq!(frame.exiting.map(|layer| layer.page), Some(PageIndex::PRODUCTS));
}

#[test]
fn non_navigation_actions_leave_state_alone() {
    let (mut controller, mut transition) = fresh();
    let last = dispatch_ui_actions(
        &mut controller,
        &mut transition,
        [
            UiAction::ViewDetails { product: 99 },
            UiAction::Social(SocialLink::Twitter),
        ],
        0.0,
    );
    assert_eq!(last, None);
    assert_eq!(controller.current_page(), PageIndex::WELCOME);
}

#[test]
fn keys_map_to_navigation() {
    use eframe::egui::Key;

    assert_eq!(NavIntent::from_key(Key::ArrowRight), Some(NavIntent::Next));
    assert_eq!(NavIntent::from_key(Key::ArrowLeft), Some(NavIntent::Previous));
    assert_eq!(
        NavIntent::from_key(Key::Num3),
        Some(NavIntent::Tab(PageIndex::CONTACT))
    );
    assert_eq!(NavIntent::from_key(Key::Enter), None);
}
