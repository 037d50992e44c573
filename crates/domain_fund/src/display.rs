//! Display-ready view models
//!
//! These bundle the formatted strings the rankings table and the fund page
//! show, so every consumer renders the same text for the same record.

use core_kernel::{Metric, SchemeCode};
use serde::Serialize;

use crate::format::{
    format_aum, format_purchase_minimum, format_return, format_score, format_timestamp,
    format_value, logo_url, return_tone, ReturnTone, PLACEHOLDER, RUPEE,
};
use crate::fund::{FundDetail, FundSummary};

const NO_OBJECTIVE: &str = "Investment objective not available.";

/// One formatted return figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnCell {
    /// Horizon label, e.g. "1Y"
    pub period: &'static str,
    pub text: String,
    pub tone: ReturnTone,
}

impl ReturnCell {
    pub fn new(period: &'static str, metric: Metric) -> Self {
        Self {
            period,
            text: format_return(metric),
            tone: return_tone(metric),
        }
    }
}

/// A row of the rankings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundRowView {
    /// 1-based position in the displayed order
    pub rank: usize,
    pub kuvera_code: SchemeCode,
    pub scheme_name: String,
    pub fund_house_name: Option<String>,
    /// Shown in place of the logo when the image is unavailable
    pub fund_house: Option<String>,
    pub logo_url: Option<String>,
    pub score: String,
    pub returns: Vec<ReturnCell>,
}

impl FundRowView {
    /// Builds table rows from funds that are already in display order
    pub fn from_sorted(funds: &[FundSummary], logo_base_url: &str) -> Vec<Self> {
        funds
            .iter()
            .enumerate()
            .map(|(index, fund)| Self::new(index + 1, fund, logo_base_url))
            .collect()
    }

    fn new(rank: usize, fund: &FundSummary, logo_base_url: &str) -> Self {
        Self {
            rank,
            kuvera_code: fund.kuvera_code.clone(),
            scheme_name: fund.scheme_name.clone(),
            fund_house_name: fund.fund_house_name.clone(),
            fund_house: fund.fund_house.clone(),
            logo_url: logo_url(logo_base_url, fund.fund_house.as_deref()),
            score: format_score(fund.total_score),
            returns: vec![
                ReturnCell::new("1D", fund.returns_1d),
                ReturnCell::new("1W", fund.returns_1w),
                ReturnCell::new("1Y", fund.returns_1y),
                ReturnCell::new("3Y", fund.returns_3y),
                ReturnCell::new("5Y", fund.returns_5y),
            ],
        }
    }
}

/// The formatted fund page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundDetailView {
    pub kuvera_code: SchemeCode,
    pub scheme_name: String,
    pub fund_house_name: Option<String>,
    pub fund_category: Option<String>,
    pub fund_type: Option<String>,
    pub logo_url: Option<String>,
    pub isin: String,
    pub nav: String,
    pub nav_date: String,
    pub score: String,
    pub score_updated: Option<String>,
    pub returns_date: String,
    pub returns: Vec<ReturnCell>,
    pub aum: String,
    pub start_date: String,
    pub fund_rating: String,
    pub fund_managers: Vec<String>,
    pub lump_sum_minimum: String,
    pub sip_minimum: String,
    pub volatility: String,
    pub portfolio_turnover: String,
    pub expense_ratio: String,
    pub crisil_rating: String,
    pub lock_in_years: String,
    pub investment_objective: String,
    pub last_updated: String,
}

fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|s| !s.is_empty())
        .map_or_else(|| PLACEHOLDER.to_string(), str::to_string)
}

/// Renders a present, non-zero metric verbatim
fn plain_number(metric: Metric) -> Option<String> {
    metric
        .value()
        .filter(|v| !v.is_zero())
        .map(|v| v.normalize().to_string())
}

impl FundDetailView {
    pub fn new(fund: &FundDetail, logo_base_url: &str) -> Self {
        let nav = match fund.current_nav.value() {
            Some(_) => format!("{RUPEE}{}", format_value(fund.current_nav, 2, "")),
            None => PLACEHOLDER.to_string(),
        };

        Self {
            kuvera_code: fund.kuvera_code.clone(),
            scheme_name: fund.scheme_name.clone(),
            fund_house_name: fund.fund_house_name.clone(),
            fund_category: fund.fund_category.clone(),
            fund_type: fund.fund_type.clone(),
            logo_url: logo_url(logo_base_url, fund.fund_house.as_deref()),
            isin: text_or_placeholder(fund.isin.as_deref()),
            nav,
            nav_date: format_timestamp(fund.current_nav_date.as_deref(), true),
            score: format_value(fund.total_score, 1, ""),
            score_updated: fund
                .score_updated
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| format_timestamp(Some(s), true)),
            returns_date: format_timestamp(fund.returns_date.as_deref(), true),
            returns: vec![
                ReturnCell::new("1D", fund.returns_1d),
                ReturnCell::new("1W", fund.returns_1w),
                ReturnCell::new("1Y", fund.returns_1y),
                ReturnCell::new("3Y", fund.returns_3y),
                ReturnCell::new("5Y", fund.returns_5y),
                ReturnCell::new("Since Inception", fund.returns_inception),
            ],
            aum: format_aum(fund.aum),
            start_date: format_timestamp(fund.start_date.as_deref(), true),
            fund_rating: plain_number(fund.fund_rating).unwrap_or_else(|| PLACEHOLDER.to_string()),
            fund_managers: fund.fund_managers.iter().map(|m| m.name.clone()).collect(),
            lump_sum_minimum: format_purchase_minimum(fund.lump_available.as_deref(), fund.lump_min),
            sip_minimum: format_purchase_minimum(fund.sip_available.as_deref(), fund.sip_min),
            volatility: format_value(fund.volatility, 2, "%"),
            portfolio_turnover: format_value(fund.portfolio_turnover, 2, "%"),
            expense_ratio: format_value(fund.expense_ratio, 2, "%"),
            crisil_rating: text_or_placeholder(fund.crisil_rating.as_deref()),
            lock_in_years: plain_number(fund.lock_in_period).unwrap_or_else(|| "0".to_string()),
            investment_objective: fund
                .investment_objective
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_OBJECTIVE.to_string()),
            last_updated: format_timestamp(fund.last_updated.as_deref(), false),
        }
    }
}
