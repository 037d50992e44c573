//! Fund store port
//!
//! The query service is expressed as a trait so the HTTP layer can run against
//! PostgreSQL in production and an in-memory store in tests.

use async_trait::async_trait;
use core_kernel::SchemeCode;

use crate::category::CategoryFilter;
use crate::error::StoreError;
use crate::fund::{FundDetail, FundSummary};

/// Read-only access to fund records
#[async_trait]
pub trait FundStore: Send + Sync {
    /// Lists scored funds matching `filter`, highest score first
    ///
    /// Order among equal scores is whatever the backing store yields.
    async fn list_funds(&self, filter: &CategoryFilter) -> Result<Vec<FundSummary>, StoreError>;

    /// Fetches the full record for a scheme code, or `None` if no fund has it
    async fn find_fund(&self, code: &SchemeCode) -> Result<Option<FundDetail>, StoreError>;

    /// Checks that the store can serve queries
    async fn ping(&self) -> Result<(), StoreError>;
}
