//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the fund rankings
//! service: PostgreSQL connection pooling with SQLx and the read-only fund
//! repository.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. `FundRepository` implements the
//! domain's `FundStore` port, so the HTTP layer never sees SQL or rows.
//!
//! Every query checks a connection out of the pool for the duration of that
//! query only; no operation spans connections or transactions.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, FundRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/funds")).await?;
//! let repo = FundRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, create_lazy_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::FundRepository;
