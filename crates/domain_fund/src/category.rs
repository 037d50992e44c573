//! Category filters for the rankings list
//!
//! Equity categories are matched exactly against `fund_category` and also
//! require an equity `fund_type`. Hybrid funds are one coarse bucket matched on
//! `fund_type` alone, since upstream does not sub-classify them consistently.

use std::fmt;

use crate::fund::FundSummary;

/// Category shown when the listing first loads
pub const DEFAULT_CATEGORY: &str = "Large Cap Fund";

/// Sentinel token meaning "no category filter"
pub const ALL_TOKEN: &str = "all";

/// Equity category tabs as `(category, label)` pairs
pub const EQUITY_CATEGORIES: [(&str, &str); 4] = [
    ("Large Cap Fund", "Large Cap"),
    ("Mid Cap Fund", "Mid Cap"),
    ("Small Cap Fund", "Small Cap"),
    ("Flexi Cap Fund", "Flexi Cap"),
];

/// A parsed category filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every scored fund
    All,
    /// Funds whose type contains "hybrid"
    Hybrid,
    /// Equity funds in exactly this category
    Equity(String),
}

impl CategoryFilter {
    /// Parses the optional `category` query token
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_fund::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from_token(None), CategoryFilter::All);
    /// assert_eq!(CategoryFilter::from_token(Some("Hybrid")), CategoryFilter::Hybrid);
    /// assert_eq!(
    ///     CategoryFilter::from_token(Some("Mid Cap Fund")),
    ///     CategoryFilter::Equity("Mid Cap Fund".to_string()),
    /// );
    /// ```
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => CategoryFilter::All,
            Some(t) if t.is_empty() || t.eq_ignore_ascii_case(ALL_TOKEN) => CategoryFilter::All,
            Some(t) if t.to_lowercase().contains("hybrid") => CategoryFilter::Hybrid,
            Some(t) => CategoryFilter::Equity(t.to_string()),
        }
    }

    /// Returns true if a fund satisfies this filter
    ///
    /// Funds without a score never match, whatever the filter.
    pub fn matches(&self, fund: &FundSummary) -> bool {
        if fund.total_score.is_missing() {
            return false;
        }
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Hybrid => fund.type_contains("hybrid"),
            CategoryFilter::Equity(category) => {
                fund.type_contains("equity") && fund.fund_category.as_deref() == Some(category.as_str())
            }
        }
    }

    /// Returns the query token that selects this filter
    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_TOKEN,
            CategoryFilter::Hybrid => "hybrid",
            CategoryFilter::Equity(category) => category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::Equity(DEFAULT_CATEGORY.to_string())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
