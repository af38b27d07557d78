//! Domain Layer
//!
//! The deploy model without I/O: release layout, phase command plans,
//! command outcomes and the ports the infrastructure layer implements.
//!
//! ## Structure
//!
//! - `entities/` - Deploy outcomes (CommandResult, PhaseReport, DeployReport)
//! - `value_objects/` - Immutable value types (Phase, ReleaseLabel, ReleaseLayout)
//! - `services/` - Pure command planning (ReleasePlan)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the network
//! 2. **Pure Functions** - Planning is stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
