//! Rankings page state
//!
//! Tracks the selected category, the outcome of the latest fetch, and the
//! active sort. Each category change issues a new ticket; a fetch result is
//! only applied when it carries the latest ticket, so a slow response for an
//! old category cannot overwrite fresher state.

use tracing::debug;

use crate::category::{CategoryFilter, DEFAULT_CATEGORY};
use crate::fund::FundSummary;
use crate::sort::{SortKey, SortState};

/// Identifies one fetch issued by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Outcome of the current fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<FundSummary>),
    Failed(String),
}

/// State behind the rankings page
#[derive(Debug, Clone)]
pub struct ListingState {
    category: String,
    latest: RequestTicket,
    load: LoadState,
    sort: SortState,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingState {
    /// Starts on the default category with its first fetch pending
    pub fn new() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            latest: RequestTicket(1),
            load: LoadState::Loading,
            sort: SortState::unsorted(),
        }
    }

    /// The selected category token
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The ticket and filter of the fetch that should currently be in flight
    pub fn pending_request(&self) -> (RequestTicket, CategoryFilter) {
        (self.latest, CategoryFilter::from_token(Some(&self.category)))
    }

    /// Selects a category and returns the ticket for its fetch
    ///
    /// Re-selecting the current category does not start a new fetch.
    pub fn select_category(&mut self, category: impl Into<String>) -> RequestTicket {
        let category = category.into();
        if category == self.category {
            return self.latest;
        }

        self.category = category;
        self.latest = RequestTicket(self.latest.0 + 1);
        self.load = LoadState::Loading;
        self.latest
    }

    /// Applies a fetch result
    ///
    /// Returns false and leaves the state untouched when `ticket` is stale.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<Vec<FundSummary>, String>) -> bool {
        if ticket != self.latest {
            debug!(?ticket, latest = ?self.latest, "Discarding stale fund list response");
            return false;
        }

        self.load = match result {
            Ok(funds) => LoadState::Loaded(funds),
            Err(message) => LoadState::Failed(message),
        };
        true
    }

    /// Current load state
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// True when the fetch succeeded with no rows; this is not an error
    pub fn is_empty(&self) -> bool {
        matches!(&self.load, LoadState::Loaded(funds) if funds.is_empty())
    }

    /// Error message of a failed fetch
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Applies a click on a column header
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Rows to display, sorted; empty while loading or after a failure
    pub fn rows(&self) -> Vec<FundSummary> {
        match &self.load {
            LoadState::Loaded(funds) => self.sort.sorted_copy(funds),
            LoadState::Loading | LoadState::Failed(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::SchemeCode;

    fn fund(code: &str) -> FundSummary {
        FundSummary::new(1, SchemeCode::new(code).unwrap(), code)
    }

    #[test]
    fn test_starts_on_default_category() {
        let state = ListingState::new();
        assert_eq!(state.category(), "Large Cap Fund");
        assert!(state.is_loading());
        let (_, filter) = state.pending_request();
        assert_eq!(filter, CategoryFilter::Equity("Large Cap Fund".to_string()));
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = ListingState::new();
        let (first, _) = state.pending_request();
        let second = state.select_category("Mid Cap Fund");

        assert!(state.resolve(second, Ok(vec![fund("MID")])));
        assert!(!state.resolve(first, Ok(vec![fund("LARGE")])));

        let rows = state.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kuvera_code.as_str(), "MID");
    }

    #[test]
    fn test_reselecting_same_category_keeps_ticket() {
        let mut state = ListingState::new();
        let (ticket, _) = state.pending_request();
        assert_eq!(state.select_category("Large Cap Fund"), ticket);
    }

    #[test]
    fn test_empty_is_not_error() {
        let mut state = ListingState::new();
        let (ticket, _) = state.pending_request();
        state.resolve(ticket, Ok(vec![]));
        assert!(state.is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_clears_rows() {
        let mut state = ListingState::new();
        let (ticket, _) = state.pending_request();
        state.resolve(ticket, Err("Failed to fetch funds data".to_string()));
        assert_eq!(state.error(), Some("Failed to fetch funds data"));
        assert!(state.rows().is_empty());
    }
}
