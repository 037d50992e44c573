//! Core Kernel - Foundational value types for the fund rankings service
//!
//! This crate provides the building blocks used across all layers:
//! - `Metric`: an optional decimal normalized from loosely typed storage values
//! - `SchemeCode`: the unique scheme identifier of a fund
//! - `DbTimestamp`: fallible parsing of database timestamp strings

pub mod metric;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use metric::{Metric, RawMetric};
pub use temporal::{DbTimestamp, TimestampParts};
pub use identifiers::SchemeCode;
pub use error::CoreError;
