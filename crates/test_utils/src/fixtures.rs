//! Pre-built Test Fixtures
//!
//! Provides ready-to-use fund records covering each listing category. The
//! set is small and predictable so tests can assert exact orderings.

use domain_fund::{FundDetail, FundSummary};
use rust_decimal_macros::dec;

use crate::builders::TestFundBuilder;

/// Fixture for fund test data
pub struct FundFixtures;

impl FundFixtures {
    pub const LARGE_CAP: &'static str = "Large Cap Fund";
    pub const MID_CAP: &'static str = "Mid Cap Fund";
    pub const EQUITY: &'static str = "Equity";
    pub const HYBRID: &'static str = "Hybrid";
    pub const FUND_HOUSE: &'static str = "AXIS";
    pub const FUND_HOUSE_NAME: &'static str = "Axis Mutual Fund";

    /// A large-cap fund with every display field populated
    pub fn large_cap_detail() -> FundDetail {
        TestFundBuilder::new("AXIS-LC-DG")
            .with_id(1)
            .with_name("Axis Bluechip Fund Direct Growth")
            .with_score(dec!(78.9))
            .with_returns([dec!(0.42), dec!(-1.25), dec!(18.204), dec!(14.5), dec!(16.1)])
            .with_aum(dec!(33456.7))
            .with_nav(dec!(58.4321), "2024-06-14 00:00:00.000000")
            .with_last_updated("2024-06-15 18:30:00.000000")
            .with_lump_sum(dec!(5000))
            .with_sip(dec!(500))
            .with_managers(&["Shreyash Devalkar", "Ashish Naik"])
            .build()
    }

    /// A second, lower-scored large-cap fund
    pub fn large_cap_runner_up() -> FundDetail {
        TestFundBuilder::new("HDFC-LC-DG")
            .with_id(2)
            .with_name("HDFC Top 100 Fund Direct Growth")
            .with_fund_house("HDFC", "HDFC Mutual Fund")
            .with_score(dec!(45.2))
            .with_returns([dec!(0.1), dec!(0.8), dec!(22.0), dec!(17.3), dec!(15.0)])
            .build()
    }

    /// A mid-cap fund
    pub fn mid_cap() -> FundDetail {
        TestFundBuilder::new("KOTAK-MC-DG")
            .with_id(3)
            .with_name("Kotak Emerging Equity Direct Growth")
            .with_fund_house("KOTAK", "Kotak Mahindra Mutual Fund")
            .with_category(Self::MID_CAP)
            .with_score(dec!(61.0))
            .build()
    }

    /// A hybrid fund
    pub fn hybrid() -> FundDetail {
        TestFundBuilder::new("ICICI-BAF-DG")
            .with_id(4)
            .with_name("ICICI Prudential Balanced Advantage Direct Growth")
            .with_fund_house("ICICI", "ICICI Prudential Mutual Fund")
            .hybrid("Balanced Advantage Fund")
            .with_score(dec!(55.5))
            .build()
    }

    /// A debt fund filed under an equity category name
    ///
    /// Only `all` lists it, since equity categories also require the type.
    pub fn mislabelled_debt() -> FundDetail {
        TestFundBuilder::new("SBI-DEBT-DG")
            .with_id(5)
            .with_name("SBI Magnum Gilt Direct Growth")
            .with_type("Debt")
            .with_score(dec!(90.0))
            .build()
    }

    /// A large-cap fund that has not been scored
    pub fn unscored() -> FundDetail {
        TestFundBuilder::new("NEW-LC-DG")
            .with_id(6)
            .with_name("New Large Cap Fund Direct Growth")
            .without_score()
            .build()
    }

    /// Every fixture record
    pub fn all_details() -> Vec<FundDetail> {
        vec![
            Self::large_cap_detail(),
            Self::large_cap_runner_up(),
            Self::mid_cap(),
            Self::hybrid(),
            Self::mislabelled_debt(),
            Self::unscored(),
        ]
    }

    /// Every fixture record, projected to the list columns
    pub fn all_summaries() -> Vec<FundSummary> {
        Self::all_details().iter().map(FundSummary::from).collect()
    }
}
