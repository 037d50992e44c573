//! Test Data Builders
//!
//! Provides builder patterns for constructing fund records with sensible
//! defaults. Tests specify only the fields they care about.

use core_kernel::{Metric, SchemeCode};
use domain_fund::{FundDetail, FundManager, FundSummary};
use rust_decimal::Decimal;

use crate::fixtures::FundFixtures;

/// Builder for constructing test fund records
///
/// The builder always produces a full `FundDetail`; `build_summary` projects
/// it down to the list columns.
///
/// # Example
///
/// ```rust
/// use test_utils::TestFundBuilder;
/// use rust_decimal_macros::dec;
///
/// let fund = TestFundBuilder::new("AXIS-LC")
///     .with_category("Large Cap Fund")
///     .with_score(dec!(72.5))
///     .build_summary();
/// assert_eq!(fund.kuvera_code.as_str(), "AXIS-LC");
/// ```
pub struct TestFundBuilder {
    fund: FundDetail,
}

impl TestFundBuilder {
    /// Creates a scored large-cap equity fund with the given scheme code
    ///
    /// # Panics
    ///
    /// Panics if `code` is blank
    pub fn new(code: &str) -> Self {
        let kuvera_code = SchemeCode::new(code).expect("test scheme code must not be blank");
        let mut fund = FundDetail::new(1, kuvera_code, format!("{code} Growth"));
        fund.fund_house = Some(FundFixtures::FUND_HOUSE.to_string());
        fund.fund_house_name = Some(FundFixtures::FUND_HOUSE_NAME.to_string());
        fund.fund_category = Some(FundFixtures::LARGE_CAP.to_string());
        fund.fund_type = Some(FundFixtures::EQUITY.to_string());
        fund.total_score = Metric::parse("50.0");
        Self { fund }
    }

    /// Sets the numeric primary key
    pub fn with_id(mut self, id: i64) -> Self {
        self.fund.id = id;
        self
    }

    /// Sets the scheme name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.fund.scheme_name = name.into();
        self
    }

    /// Sets the fund category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.fund.fund_category = Some(category.into());
        self
    }

    /// Sets the fund type
    pub fn with_type(mut self, fund_type: impl Into<String>) -> Self {
        self.fund.fund_type = Some(fund_type.into());
        self
    }

    /// Makes this a hybrid fund in the given category
    pub fn hybrid(self, category: impl Into<String>) -> Self {
        self.with_type(FundFixtures::HYBRID).with_category(category)
    }

    /// Sets the fund-house identifier and display name
    pub fn with_fund_house(mut self, house: impl Into<String>, name: impl Into<String>) -> Self {
        self.fund.fund_house = Some(house.into());
        self.fund.fund_house_name = Some(name.into());
        self
    }

    /// Sets the composite score
    pub fn with_score(mut self, score: Decimal) -> Self {
        self.fund.total_score = Metric::new(score);
        self
    }

    /// Clears the score, which hides the fund from every listing
    pub fn without_score(mut self) -> Self {
        self.fund.total_score = Metric::missing();
        self
    }

    /// Sets the 1D, 1W, 1Y, 3Y and 5Y returns
    pub fn with_returns(mut self, returns: [Decimal; 5]) -> Self {
        let [d1, w1, y1, y3, y5] = returns;
        self.fund.returns_1d = Metric::new(d1);
        self.fund.returns_1w = Metric::new(w1);
        self.fund.returns_1y = Metric::new(y1);
        self.fund.returns_3y = Metric::new(y3);
        self.fund.returns_5y = Metric::new(y5);
        self
    }

    /// Sets the assets under management, in crores
    pub fn with_aum(mut self, aum: Decimal) -> Self {
        self.fund.aum = Metric::new(aum);
        self
    }

    /// Sets the current NAV and its date
    pub fn with_nav(mut self, nav: Decimal, date: impl Into<String>) -> Self {
        self.fund.current_nav = Metric::new(nav);
        self.fund.current_nav_date = Some(date.into());
        self
    }

    /// Sets the last-updated timestamp text
    pub fn with_last_updated(mut self, text: impl Into<String>) -> Self {
        self.fund.last_updated = Some(text.into());
        self
    }

    /// Enables lump-sum purchases with the given minimum
    pub fn with_lump_sum(mut self, minimum: Decimal) -> Self {
        self.fund.lump_available = Some("Y".to_string());
        self.fund.lump_min = Metric::new(minimum);
        self
    }

    /// Enables SIP purchases with the given minimum
    pub fn with_sip(mut self, minimum: Decimal) -> Self {
        self.fund.sip_available = Some("Y".to_string());
        self.fund.sip_min = Metric::new(minimum);
        self
    }

    /// Sets the fund managers by name
    pub fn with_managers(mut self, names: &[&str]) -> Self {
        self.fund.fund_managers = names
            .iter()
            .map(|name| FundManager { name: name.to_string() })
            .collect();
        self
    }

    /// Builds the full detail record
    pub fn build(self) -> FundDetail {
        self.fund
    }

    /// Builds the list projection
    pub fn build_summary(self) -> FundSummary {
        FundSummary::from(&self.fund)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_are_scored_large_cap_equity() {
        let fund = TestFundBuilder::new("X").build_summary();
        assert_eq!(fund.fund_category.as_deref(), Some("Large Cap Fund"));
        assert!(fund.type_contains("equity"));
        assert!(!fund.total_score.is_missing());
    }

    #[test]
    fn test_hybrid_sets_type_and_category() {
        let fund = TestFundBuilder::new("H")
            .hybrid("Balanced Advantage Fund")
            .with_score(dec!(12.5))
            .build();
        assert_eq!(fund.fund_type.as_deref(), Some("Hybrid"));
        assert_eq!(fund.total_score.value(), Some(dec!(12.5)));
    }
}
