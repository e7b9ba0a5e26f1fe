use super::*;

fn controller_at(page: PageIndex) -> ViewController {
    let mut controller = ViewController::new();
    controller.go_to_page(page);
    controller
}

fn all_indices() -> [PageIndex; PAGE_COUNT] {
    Page::ALL.map(Page::index)
}

#[test]
fn starts_on_welcome_with_prev_disabled() {
    let controller = ViewController::new();
    assert_eq!(controller.current_page(), PageIndex::WELCOME);
    assert_eq!(controller.current(), Page::Welcome);
    assert!(!controller.prev_enabled());
    assert!(controller.next_enabled());
}

#[test]
fn go_to_page_lands_on_target_from_any_state() {
    for start in all_indices() {
        for target in all_indices() {
            let mut controller = controller_at(start);
            controller.go_to_page(target);
            assert_eq!(controller.current_page(), target, "{start} -> {target}");
        }
    }
}

#[test]
fn direction_follows_target_ordering() {
    for start in all_indices() {
        for target in all_indices() {
            let mut controller = controller_at(start);
            let navigation = controller.go_to_page(target);
            if target > start {
                assert_eq!(controller.direction(), Direction::Forward);
                assert_eq!(
                    navigation,
                    Some(Navigation {
                        from: start,
                        to: target,
                        direction: Direction::Forward
                    })
                );
            } else if target < start {
                assert_eq!(controller.direction(), Direction::Backward);
                assert_eq!(navigation.map(|n| n.direction), Some(Direction::Backward));
            } else {
                assert_eq!(navigation, None);
            }
        }
    }
}

#[test]
fn requesting_active_page_keeps_state_and_direction() {
    let mut controller = controller_at(PageIndex::CONTACT);
    controller.go_to_page(PageIndex::PRODUCTS);
    assert_eq!(controller.direction(), Direction::Backward);

    let before = (controller.current_page(), controller.direction());
    assert_eq!(controller.go_to_page(PageIndex::PRODUCTS), None);
    assert_eq!(controller.go_to_page(PageIndex::PRODUCTS), None);
    assert_eq!((controller.current_page(), controller.direction()), before);
}

#[test]
fn arrows_are_no_ops_at_their_boundaries() {
    let mut controller = ViewController::new();
    assert_eq!(controller.prev(), None);
    assert_eq!(controller.current_page(), PageIndex::WELCOME);
    assert_eq!(controller.direction(), Direction::Forward);

    let mut controller = controller_at(PageIndex::CONTACT);
    assert!(!controller.next_enabled());
    assert_eq!(controller.next(), None);
    assert_eq!(controller.current_page(), PageIndex::CONTACT);
    assert_eq!(controller.direction(), Direction::Forward);
}

#[test]
fn next_twice_then_prev_walks_back_one_page() {
    let mut controller = ViewController::new();
    controller.next();
    controller.next();
    assert_eq!(controller.current_page(), PageIndex::CONTACT);

    controller.prev();
    assert_eq!(controller.current_page(), PageIndex::PRODUCTS);
    assert_eq!(controller.direction(), Direction::Backward);
}

#[test]
fn out_of_range_indices_are_ignored() {
    for start in all_indices() {
        let mut controller = controller_at(start);
        let direction = controller.direction();
        assert_eq!(controller.go_to_index(3), None);
        assert_eq!(controller.go_to_index(usize::MAX), None);
        assert_eq!(controller.current_page(), start);
        assert_eq!(controller.direction(), direction);
    }

    let mut controller = ViewController::new();
    assert!(controller.go_to_index(2).is_some());
    assert_eq!(controller.current(), Page::Contact);
}

#[test]
fn exactly_the_active_tab_is_selected() {
    for start in all_indices() {
        let controller = controller_at(start);
        let tabs = controller.tabs();
        assert_eq!(tabs.iter().filter(|tab| tab.selected).count(), 1);
        for tab in tabs {
            assert_eq!(tab.selected, tab.page.index() == start);
        }
    }
}

#[test]
fn tab_then_prev_scenario() {
    let mut controller = ViewController::new();
    assert!(!controller.prev_enabled());
    assert!(controller.next_enabled());

    controller.go_to_page(Page::Products.index());
    assert_eq!(controller.current_page(), PageIndex::PRODUCTS);
    assert_eq!(controller.direction(), Direction::Forward);
    assert!(controller.prev_enabled());
    assert!(controller.next_enabled());

    controller.prev();
    assert_eq!(controller.current_page(), PageIndex::WELCOME);
    assert_eq!(controller.direction(), Direction::Backward);
    assert!(!controller.prev_enabled());
}
