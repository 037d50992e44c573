//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fund rankings test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built fund records for common scenarios
//! - `builders`: Builder patterns for test data construction
//! - `store`: In-memory `FundStore` for exercising the HTTP layer
//! - `database`: Database test helpers and container management
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod store;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use store::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
