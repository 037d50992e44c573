//! In-memory fund store
//!
//! Implements `FundStore` over a fixed set of records so the HTTP layer can be
//! tested without PostgreSQL. Filtering and ordering follow the SQL queries:
//! scored rows only, highest score first, ties in insertion order.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use core_kernel::SchemeCode;
use domain_fund::{CategoryFilter, FundDetail, FundStore, FundSummary, SortState, StoreError};

use crate::fixtures::FundFixtures;

/// A `FundStore` backed by a vector of detail records
#[derive(Debug, Default)]
pub struct InMemoryFundStore {
    funds: Vec<FundDetail>,
    failing: AtomicBool,
}

impl InMemoryFundStore {
    /// Creates a store holding `funds`
    pub fn new(funds: Vec<FundDetail>) -> Self {
        Self {
            funds,
            failing: AtomicBool::new(false),
        }
    }

    /// Creates a store holding every fixture record
    pub fn with_fixtures() -> Self {
        Self::new(FundFixtures::all_details())
    }

    /// Creates a store whose every call fails as if the database were down
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    /// Toggles simulated storage failure
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FundStore for InMemoryFundStore {
    async fn list_funds(&self, filter: &CategoryFilter) -> Result<Vec<FundSummary>, StoreError> {
        self.check_available()?;
        let mut rows: Vec<FundSummary> = self
            .funds
            .iter()
            .map(FundSummary::from)
            .filter(|fund| filter.matches(fund))
            .collect();
        SortState::unsorted().sort(&mut rows);
        Ok(rows)
    }

    async fn find_fund(&self, code: &SchemeCode) -> Result<Option<FundDetail>, StoreError> {
        self.check_available()?;
        Ok(self.funds.iter().find(|f| &f.kuvera_code == code).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
