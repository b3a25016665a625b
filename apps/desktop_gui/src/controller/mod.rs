//! Controller layer: UI events, error categories, and command orchestration.

pub mod events;
pub mod orchestration;
