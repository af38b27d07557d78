//! Domain Value Objects
//!
//! Immutable value types that represent deploy concepts.

mod phase;
mod release_label;
mod release_layout;

pub use phase::Phase;
pub use release_label::{ReleaseLabel, RELEASE_LABEL_FORMAT};
pub use release_layout::ReleaseLayout;
