use std::fmt;

use crate::error::PageIndexError;

/// Number of pages in the showcase.
pub const PAGE_COUNT: usize = 3;

/// Position of one of the fixed pages. Always in `0..PAGE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(usize);

impl PageIndex {
    pub const WELCOME: Self = Self(0);
    pub const PRODUCTS: Self = Self(1);
    pub const CONTACT: Self = Self(2);

    pub const FIRST: Self = Self::WELCOME;
    pub const LAST: Self = Self(PAGE_COUNT - 1);

    pub fn new(index: usize) -> Option<Self> {
        (index < PAGE_COUNT).then_some(Self(index))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).and_then(Self::new)
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for PageIndex {
    type Error = PageIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(PageIndexError::OutOfRange {
            index,
            count: PAGE_COUNT,
        })
    }
}

impl From<PageIndex> for usize {
    fn from(value: PageIndex) -> Self {
        value.0
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Welcome,
    Products,
    Contact,
}

impl Page {
    pub const ALL: [Page; PAGE_COUNT] = [Page::Welcome, Page::Products, Page::Contact];

    pub fn index(self) -> PageIndex {
        match self {
            Page::Welcome => PageIndex::WELCOME,
            Page::Products => PageIndex::PRODUCTS,
            Page::Contact => PageIndex::CONTACT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Welcome => "Welcome",
            Page::Products => "Products",
            Page::Contact => "Contact",
        }
    }
}

impl From<PageIndex> for Page {
    fn from(value: PageIndex) -> Self {
        Page::ALL[value.0]
    }
}

/// Which way the page slide travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a move from `current` to `target`, `None` when they are the same page.
    pub fn between(current: PageIndex, target: PageIndex) -> Option<Self> {
        match target.cmp(&current) {
            std::cmp::Ordering::Greater => Some(Direction::Forward),
            std::cmp::Ordering::Less => Some(Direction::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// `1.0` for forward, `-1.0` for backward.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// One effective page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: PageIndex,
    pub to: PageIndex,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_index_rejects_out_of_range_values() {
        assert_eq!(PageIndex::new(2), Some(PageIndex::CONTACT));
        assert_eq!(PageIndex::new(3), None);
        assert_eq!(PageIndex::new(usize::MAX), None);
        assert_eq!(
            PageIndex::try_from(7_usize),
            Err(PageIndexError::OutOfRange { index: 7, count: 3 })
        );
    }

    #[test]
    fn page_index_steps_stop_at_boundaries() {
        assert_eq!(PageIndex::FIRST.prev(), None);
        assert_eq!(PageIndex::LAST.next(), None);
        assert_eq!(PageIndex::WELCOME.next(), Some(PageIndex::PRODUCTS));
        assert_eq!(PageIndex::CONTACT.prev(), Some(PageIndex::PRODUCTS));
    }

    #[test]
    fn pages_map_to_their_indices_in_order() {
        for (position, page) in Page::ALL.into_iter().enumerate() {
            assert_eq!(page.index().get(), position);
            assert_eq!(Page::from(page.index()), page);
        }
        assert_eq!(Page::Products.label(), "Products");
    }

    #[test]
    fn direction_between_is_antisymmetric() {
        for a in Page::ALL.map(Page::index) {
            for b in Page::ALL.map(Page::index) {
                match (Direction::between(a, b), Direction::between(b, a)) {
                    (None, None) => assert_eq!(a, b),
                    (Some(Direction::Forward), Some(Direction::Backward)) => assert!(b > a),
                    (Some(Direction::Backward), Some(Direction::Forward)) => assert!(b < a),
                    other => panic!("unexpected pair {other:?} for {a} -> {b}"),
                }
            }
        }
    }
}
