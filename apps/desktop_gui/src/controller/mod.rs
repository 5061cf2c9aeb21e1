//! Controller layer: UI events and their translation into store operations.

pub mod events;
pub mod orchestration;
