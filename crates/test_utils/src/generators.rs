//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating fund records and metric values
//! that look like what the ingestion job writes.

use core_kernel::{Metric, SchemeCode};
use domain_fund::{FundSummary, EQUITY_CATEGORIES};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for return percentages between -99.99 and 99.99
pub fn return_percentage_strategy() -> impl Strategy<Value = Decimal> {
    (-9999i64..10000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for composite scores between 0.0 and 100.0
pub fn score_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1000i64).prop_map(|n| Decimal::new(n, 1))
}

/// Strategy for optional metrics, missing about one time in five
pub fn metric_strategy() -> impl Strategy<Value = Metric> {
    prop_oneof![
        1 => Just(Metric::missing()),
        4 => return_percentage_strategy().prop_map(Metric::new),
    ]
}

/// Strategy for fund types as upstream writes them
pub fn fund_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Equity".to_string()),
        Just("EQUITY".to_string()),
        Just("Hybrid".to_string()),
        Just("hybrid".to_string()),
        Just("Debt".to_string()),
    ]
}

/// Strategy for fund categories, mostly the equity tabs
pub fn fund_category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(EQUITY_CATEGORIES.to_vec()).prop_map(|(category, _)| category.to_string()),
        1 => Just("Balanced Advantage Fund".to_string()),
    ]
}

/// Strategy for scheme names, including digit runs for natural ordering
pub fn scheme_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}( [0-9]{1,3})?( [A-Za-z]{1,6})?"
}

/// Strategy for a list-row fund with the given id
pub fn fund_summary_strategy(id: i64) -> impl Strategy<Value = FundSummary> {
    (
        scheme_name_strategy(),
        fund_type_strategy(),
        fund_category_strategy(),
        proptest::option::of(score_strategy()),
        proptest::collection::vec(metric_strategy(), 5),
    )
        .prop_map(move |(name, fund_type, category, score, returns)| {
            let code = SchemeCode::new(format!("GEN-{id}")).expect("generated code is never blank");
            let mut fund = FundSummary::new(id, code, name);
            fund.fund_type = Some(fund_type);
            fund.fund_category = Some(category);
            fund.total_score = score.into();
            fund.returns_1d = returns[0];
            fund.returns_1w = returns[1];
            fund.returns_1y = returns[2];
            fund.returns_3y = returns[3];
            fund.returns_5y = returns[4];
            fund
        })
}

/// Strategy for a list of funds with distinct ids and codes
pub fn fund_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<FundSummary>> {
    (0..=max_len).prop_flat_map(|len| {
        (0..len)
            .map(|i| fund_summary_strategy(i as i64 + 1))
            .collect::<Vec<_>>()
    })
}
