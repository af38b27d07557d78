//! Property tests for skiff.
//!
//! Properties use randomized input generation to protect the invariants of
//! release naming and command generation.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/release_label.rs"]
mod release_label;

#[path = "properties/release_plan.rs"]
mod release_plan;
