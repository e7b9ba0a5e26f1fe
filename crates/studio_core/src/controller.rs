//! Active-page state machine behind the tab bar and the prev/next arrows.

use tracing::{debug, trace};

use crate::domain::{Direction, Navigation, Page, PageIndex, PAGE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub page: Page,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    current_page: PageIndex,
    direction: Direction,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> PageIndex {
        self.current_page
    }

    pub fn current(&self) -> Page {
        self.current_page.into()
    }

    /// Direction of the last effective navigation. Kept as-is across no-op requests.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves to `target`. Returns `None` when `target` is already active.
    pub fn go_to_page(&mut self, target: PageIndex) -> Option<Navigation> {
        let from = self.current_page;
        let direction = Direction::between(from, target)?;

        self.direction = direction;
        self.current_page = target;
        debug!(%from, to = %target, ?direction, "page transition");

        Some(Navigation {
            from,
            to: target,
            direction,
        })
    }

    /// Like [`ViewController::go_to_page`] for raw indices; anything out of range is ignored.
    pub fn go_to_index(&mut self, index: usize) -> Option<Navigation> {
        match PageIndex::new(index) {
            Some(target) => self.go_to_page(target),
            None => {
                trace!(index, count = PAGE_COUNT, "ignoring out-of-range page request");
                None
            }
        }
    }

    pub fn next(&mut self) -> Option<Navigation> {
        let target = self.current_page.next()?;
        self.go_to_page(target)
    }

    pub fn prev(&mut self) -> Option<Navigation> {
        let target = self.current_page.prev()?;
        self.go_to_page(target)
    }

    pub fn prev_enabled(&self) -> bool {
        !self.current_page.is_first()
    }

    pub fn next_enabled(&self) -> bool {
        !self.current_page.is_last()
    }

    pub fn is_selected(&self, page: PageIndex) -> bool {
        self.current_page == page
    }

    pub fn tabs(&self) -> [TabState; PAGE_COUNT] {
        Page::ALL.map(|page| TabState {
            page,
            selected: self.is_selected(page.index()),
        })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
