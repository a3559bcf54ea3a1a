//! Common test utilities for icongen CLI and golden tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus CLI runner
//! - Fixtures: reusable icon content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
