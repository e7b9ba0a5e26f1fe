//! Toolkit-independent core of the Design Studio showcase: pages, navigation state,
//! product catalog and the slide/reveal tween model.

pub mod catalog;
pub mod controller;
pub mod domain;
pub mod error;
pub mod image;
pub mod transition;

pub use catalog::{products, Product, PRODUCTS};
pub use controller::{TabState, ViewController};
pub use domain::{Direction, Navigation, Page, PageIndex, PAGE_COUNT};
pub use error::{ImageError, PageIndexError};
pub use image::PlaceholderImage;
pub use transition::{Layer, MotionSettings, Reveal, SlideFrame, SlideTransition};
