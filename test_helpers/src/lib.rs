//! Test helpers shared across crates.
//!
//! This crate currently provides helpers for picking apart rendered help
//! text.

pub mod text;
