//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

mod release_plan;

pub use release_plan::ReleasePlan;
