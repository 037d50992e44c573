//! Fund Rankings Domain
//!
//! This crate holds the fund records served by the rankings service together
//! with the rules for filtering, ordering and displaying them.
//!
//! # Key Concepts
//!
//! - **Fund**: a mutual-fund scheme identified by its scheme code
//! - **Composite score**: a precomputed ranking number, only meaningful
//!   within one category
//! - **Category filter**: an exact equity category, or the coarse hybrid bucket
//! - **AUM**: assets under management, displayed in crores
//!
//! # Ordering
//!
//! The store returns funds highest score first. The table can re-sort the
//! in-memory copy by name or by one numeric column at a time; see [`sort`].

pub mod fund;
pub mod category;
pub mod store;
pub mod format;
pub mod sort;
pub mod listing;
pub mod display;
pub mod error;

pub use fund::{parse_fund_managers, FundDetail, FundManager, FundSummary};
pub use category::{CategoryFilter, DEFAULT_CATEGORY, EQUITY_CATEGORIES};
pub use store::FundStore;
pub use format::ReturnTone;
pub use sort::{SortDirection, SortKey, SortState};
pub use listing::{ListingState, LoadState, RequestTicket};
pub use display::{FundDetailView, FundRowView, ReturnCell};
pub use error::{FundError, StoreError};
