//! Controller layer: UI events, reducer-like state transitions, and event queue orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
