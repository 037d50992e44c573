//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for fund listings that give more
//! meaningful failure messages than standard assertions.

use domain_fund::{CategoryFilter, FundSummary};

/// Asserts that funds are in non-increasing score order
///
/// # Panics
///
/// Panics at the first adjacent pair where the score increases
pub fn assert_score_descending(funds: &[FundSummary]) {
    for pair in funds.windows(2) {
        assert!(
            pair[0].total_score.or_zero() >= pair[1].total_score.or_zero(),
            "Funds out of score order: {} ({}) before {} ({})",
            pair[0].kuvera_code,
            pair[0].total_score,
            pair[1].kuvera_code,
            pair[1].total_score
        );
    }
}

/// Asserts that every fund satisfies the category filter
///
/// # Panics
///
/// Panics naming the first fund that does not match
pub fn assert_all_match(funds: &[FundSummary], filter: &CategoryFilter) {
    for fund in funds {
        assert!(
            filter.matches(fund),
            "Fund {} (type {:?}, category {:?}, score {}) does not match filter '{}'",
            fund.kuvera_code,
            fund.fund_type,
            fund.fund_category,
            fund.total_score,
            filter
        );
    }
}

/// Asserts the exact scheme codes of a listing, in order
pub fn assert_codes(funds: &[FundSummary], expected: &[&str]) {
    let actual: Vec<&str> = funds.iter().map(|f| f.kuvera_code.as_str()).collect();
    assert_eq!(actual, expected, "Unexpected fund listing");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FundFixtures;

    #[test]
    fn test_fixture_summaries_match_all() {
        let funds: Vec<_> = FundFixtures::all_summaries()
            .into_iter()
            .filter(|f| !f.total_score.is_missing())
            .collect();
        assert_all_match(&funds, &CategoryFilter::All);
    }

    #[test]
    #[should_panic(expected = "out of score order")]
    fn test_detects_ascending_scores() {
        let mut funds = FundFixtures::all_summaries();
        funds.reverse();
        assert_score_descending(&funds);
    }
}
