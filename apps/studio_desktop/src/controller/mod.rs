//! UI intents and their dispatch into the page controller.

pub mod events;
pub mod orchestration;
