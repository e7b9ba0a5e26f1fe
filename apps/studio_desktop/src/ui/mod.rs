//! UI layer: app shell, navigation, page bodies, transition renderer, image box and theme.

pub mod app;
pub mod image_box;
pub mod nav;
pub mod pages;
pub mod theme;
pub mod transition;

pub use app::StudioApp;
