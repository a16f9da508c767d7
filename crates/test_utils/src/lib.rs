//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! car insurance test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data, including the seeded round-trip store
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for timelines and errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
