//! Fund records
//!
//! This module defines the two projections of a row in the `funds` table:
//! the summary used by the rankings list and the full detail record.

use core_kernel::{Metric, SchemeCode};
use serde::{Deserialize, Deserializer, Serialize};

/// Summary projection of a fund, as returned by the list operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSummary {
    /// Numeric primary key
    pub id: i64,
    /// Unique scheme code
    pub kuvera_code: SchemeCode,
    /// Display name of the scheme
    pub scheme_name: String,
    /// Fund-house display name
    pub fund_house_name: Option<String>,
    /// Category, e.g. "Large Cap Fund"
    pub fund_category: Option<String>,
    /// Type, e.g. "Equity" or "Hybrid"
    pub fund_type: Option<String>,
    pub returns_1d: Metric,
    pub returns_1w: Metric,
    pub returns_1y: Metric,
    pub returns_3y: Metric,
    pub returns_5y: Metric,
    pub returns_inception: Metric,
    /// Composite ranking score
    pub total_score: Metric,
    /// Assets under management, in crores
    pub aum: Metric,
    pub expense_ratio: Metric,
    /// Star rating
    pub fund_rating: Metric,
    pub last_updated: Option<String>,
    /// Fund-house identifier, used for logo lookup
    pub fund_house: Option<String>,
}

impl FundSummary {
    /// Creates a summary with only the identifying fields set
    pub fn new(id: i64, kuvera_code: SchemeCode, scheme_name: impl Into<String>) -> Self {
        Self {
            id,
            kuvera_code,
            scheme_name: scheme_name.into(),
            fund_house_name: None,
            fund_category: None,
            fund_type: None,
            returns_1d: Metric::missing(),
            returns_1w: Metric::missing(),
            returns_1y: Metric::missing(),
            returns_3y: Metric::missing(),
            returns_5y: Metric::missing(),
            returns_inception: Metric::missing(),
            total_score: Metric::missing(),
            aum: Metric::missing(),
            expense_ratio: Metric::missing(),
            fund_rating: Metric::missing(),
            last_updated: None,
            fund_house: None,
        }
    }

    /// Returns true if the fund type contains `needle`, ignoring case
    pub fn type_contains(&self, needle: &str) -> bool {
        self.fund_type
            .as_deref()
            .map_or(false, |t| t.to_lowercase().contains(&needle.to_lowercase()))
    }
}

/// A named fund manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundManager {
    pub name: String,
}

impl<'de> Deserialize<'de> for FundManager {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Upstream stores either bare names or `{ "name": ... }` objects
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Name(String),
            Record { name: String },
        }

        Ok(match Entry::deserialize(deserializer)? {
            Entry::Name(name) | Entry::Record { name } => FundManager { name },
        })
    }
}

/// Parses the stored fund-manager column
///
/// The column holds a JSON array of names or `{ name }` objects. Text that is
/// not such an array is kept as a single entry; null or blank yields none.
pub fn parse_fund_managers(raw: Option<&str>) -> Vec<FundManager> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<FundManager>>(raw) {
        Ok(managers) => managers,
        Err(_) => vec![FundManager { name: raw.to_string() }],
    }
}

/// Full fund record, as returned by the detail operation
///
/// The five timestamp columns `current_nav_date`, `returns_date`,
/// `start_date`, `score_updated` and `last_updated` hold text formatted as
/// `YYYY-MM-DD HH24:MI:SS.US` by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundDetail {
    pub id: i64,
    pub kuvera_code: SchemeCode,
    pub scheme_name: String,
    pub isin: Option<String>,
    pub fund_house: Option<String>,
    pub fund_house_name: Option<String>,
    pub fund_category: Option<String>,
    pub fund_type: Option<String>,
    /// "Y" when lump-sum purchases are accepted
    pub lump_available: Option<String>,
    pub lump_min: Metric,
    /// "Y" when SIP purchases are accepted
    pub sip_available: Option<String>,
    pub sip_min: Metric,
    /// Lock-in period in years
    pub lock_in_period: Metric,
    pub current_nav: Metric,
    pub current_nav_date: Option<String>,
    pub t1_nav: Metric,
    pub t1_nav_date: Option<String>,
    pub returns_1d: Metric,
    pub returns_1w: Metric,
    pub returns_1y: Metric,
    pub returns_3y: Metric,
    pub returns_5y: Metric,
    pub returns_inception: Metric,
    pub returns_date: Option<String>,
    pub start_date: Option<String>,
    pub expense_ratio: Metric,
    pub investment_objective: Option<String>,
    pub volatility: Metric,
    pub portfolio_turnover: Metric,
    pub aum: Metric,
    pub fund_rating: Metric,
    pub crisil_rating: Option<String>,
    pub total_score: Metric,
    pub score_updated: Option<String>,
    pub last_updated: Option<String>,
    pub created_at: Option<String>,
    pub fund_managers: Vec<FundManager>,
}

impl FundDetail {
    /// Creates a detail record with only the identifying fields set
    pub fn new(id: i64, kuvera_code: SchemeCode, scheme_name: impl Into<String>) -> Self {
        Self {
            id,
            kuvera_code,
            scheme_name: scheme_name.into(),
            isin: None,
            fund_house: None,
            fund_house_name: None,
            fund_category: None,
            fund_type: None,
            lump_available: None,
            lump_min: Metric::missing(),
            sip_available: None,
            sip_min: Metric::missing(),
            lock_in_period: Metric::missing(),
            current_nav: Metric::missing(),
            current_nav_date: None,
            t1_nav: Metric::missing(),
            t1_nav_date: None,
            returns_1d: Metric::missing(),
            returns_1w: Metric::missing(),
            returns_1y: Metric::missing(),
            returns_3y: Metric::missing(),
            returns_5y: Metric::missing(),
            returns_inception: Metric::missing(),
            returns_date: None,
            start_date: None,
            expense_ratio: Metric::missing(),
            investment_objective: None,
            volatility: Metric::missing(),
            portfolio_turnover: Metric::missing(),
            aum: Metric::missing(),
            fund_rating: Metric::missing(),
            crisil_rating: None,
            total_score: Metric::missing(),
            score_updated: None,
            last_updated: None,
            created_at: None,
            fund_managers: Vec::new(),
        }
    }
}

impl From<&FundDetail> for FundSummary {
    fn from(detail: &FundDetail) -> Self {
        Self {
            id: detail.id,
            kuvera_code: detail.kuvera_code.clone(),
            scheme_name: detail.scheme_name.clone(),
            fund_house_name: detail.fund_house_name.clone(),
            fund_category: detail.fund_category.clone(),
            fund_type: detail.fund_type.clone(),
            returns_1d: detail.returns_1d,
            returns_1w: detail.returns_1w,
            returns_1y: detail.returns_1y,
            returns_3y: detail.returns_3y,
            returns_5y: detail.returns_5y,
            returns_inception: detail.returns_inception,
            total_score: detail.total_score,
            aum: detail.aum,
            expense_ratio: detail.expense_ratio,
            fund_rating: detail.fund_rating,
            last_updated: detail.last_updated.clone(),
            fund_house: detail.fund_house.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> SchemeCode {
        SchemeCode::new(s).unwrap()
    }

    #[test]
    fn test_type_contains_ignores_case() {
        let mut fund = FundSummary::new(1, code("A"), "Alpha");
        fund.fund_type = Some("Equity".to_string());
        assert!(fund.type_contains("equity"));
        assert!(!fund.type_contains("hybrid"));
    }

    #[test]
    fn test_managers_from_objects_and_names() {
        let managers = parse_fund_managers(Some(r#"[{"name":"A. Shah"},"R. Iyer"]"#));
        let names: Vec<_> = managers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A. Shah", "R. Iyer"]);
    }

    #[test]
    fn test_managers_plain_text_kept() {
        let managers = parse_fund_managers(Some("A. Shah"));
        assert_eq!(managers, vec![FundManager { name: "A. Shah".to_string() }]);
    }

    #[test]
    fn test_summary_projection_keeps_list_columns() {
        let mut detail = FundDetail::new(3, code("HYB-1"), "Balanced");
        detail.fund_type = Some("Hybrid".to_string());
        detail.total_score = Metric::parse("61.5");
        detail.isin = Some("INF000000000".to_string());

        let summary = FundSummary::from(&detail);
        assert_eq!(summary.id, 3);
        assert_eq!(summary.kuvera_code, detail.kuvera_code);
        assert_eq!(summary.total_score, detail.total_score);
        assert!(summary.type_contains("hybrid"));
    }

    #[test]
    fn test_managers_null() {
        assert!(parse_fund_managers(None).is_empty());
        assert!(parse_fund_managers(Some("  ")).is_empty());
    }
}
