//! Common test utilities for skiff CLI tests.
//!
//! This module provides:
//! - `TestEnv`: a temp directory holding app configs and a stand-in ssh
//! - Fixtures: reusable config content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
