//! Repository implementations
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types. Queries are built at runtime with `QueryBuilder` because the
//! category filter changes the `WHERE` clause.

pub mod fund;

pub use fund::FundRepository;
