//! Fund repository implementation
//!
//! This module provides read-only database access to the `funds` table and
//! implements the domain's `FundStore` port.
//!
//! Numeric columns are selected as text so that rows holding either numeric
//! or numeric-text values decode the same way; they are normalized into
//! `Metric` values when the row is mapped.

use async_trait::async_trait;
use core_kernel::{Metric, SchemeCode};
use domain_fund::{parse_fund_managers, CategoryFilter, FundDetail, FundStore, FundSummary, StoreError};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, instrument, warn};

use crate::error::DatabaseError;

/// Output pattern applied to timestamp columns of the detail record
pub const TIMESTAMP_PATTERN: &str = "YYYY-MM-DD HH24:MI:SS.US";

/// Columns of the summary projection
const SUMMARY_COLUMNS: &str = r#"
    id::bigint AS id,
    kuvera_code,
    COALESCE(scheme_name, '') AS scheme_name,
    fund_house_name,
    fund_category,
    fund_type,
    returns_1d::text AS returns_1d,
    returns_1w::text AS returns_1w,
    returns_1y::text AS returns_1y,
    returns_3y::text AS returns_3y,
    returns_5y::text AS returns_5y,
    returns_inception::text AS returns_inception,
    total_score::text AS total_score,
    aum::text AS aum,
    expense_ratio::text AS expense_ratio,
    fund_rating::text AS fund_rating,
    last_updated::text AS last_updated,
    fund_house"#;

/// Full-record lookup by scheme code
const DETAIL_SQL: &str = r#"
    SELECT
        id::bigint AS id,
        kuvera_code,
        COALESCE(scheme_name, '') AS scheme_name,
        isin,
        fund_house,
        fund_house_name,
        fund_category,
        fund_type,
        lump_available,
        lump_min::text AS lump_min,
        sip_available,
        sip_min::text AS sip_min,
        lock_in_period::text AS lock_in_period,
        current_nav::text AS current_nav,
        to_char(current_nav_date, 'YYYY-MM-DD HH24:MI:SS.US') AS current_nav_date,
        t1_nav::text AS t1_nav,
        t1_nav_date::text AS t1_nav_date,
        returns_1d::text AS returns_1d,
        returns_1w::text AS returns_1w,
        returns_1y::text AS returns_1y,
        returns_3y::text AS returns_3y,
        returns_5y::text AS returns_5y,
        returns_inception::text AS returns_inception,
        to_char(returns_date, 'YYYY-MM-DD HH24:MI:SS.US') AS returns_date,
        to_char(start_date, 'YYYY-MM-DD HH24:MI:SS.US') AS start_date,
        expense_ratio::text AS expense_ratio,
        investment_objective,
        volatility::text AS volatility,
        portfolio_turnover::text AS portfolio_turnover,
        aum::text AS aum,
        fund_rating::text AS fund_rating,
        crisil_rating,
        total_score::text AS total_score,
        to_char(score_updated, 'YYYY-MM-DD HH24:MI:SS.US') AS score_updated,
        to_char(last_updated, 'YYYY-MM-DD HH24:MI:SS.US') AS last_updated,
        created_at::text AS created_at,
        fund_managers::text AS fund_managers
    FROM funds
    WHERE kuvera_code = $1
    "#;

/// Builds the list query for a category filter
///
/// Only funds with a score are listed, highest score first. The equity
/// category is bound as a parameter, never interpolated.
///
/// # Example
///
/// ```rust
/// use domain_fund::CategoryFilter;
/// use infra_db::repositories::fund::list_query;
///
/// let query = list_query(&CategoryFilter::Hybrid);
/// assert!(query.sql().contains("fund_type ILIKE '%hybrid%'"));
/// ```
pub fn list_query(filter: &CategoryFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT");
    builder.push(SUMMARY_COLUMNS);
    builder.push(" FROM funds WHERE total_score IS NOT NULL");

    match filter {
        CategoryFilter::All => {}
        CategoryFilter::Hybrid => {
            builder.push(" AND fund_type ILIKE '%hybrid%'");
        }
        CategoryFilter::Equity(category) => {
            builder.push(" AND fund_type ILIKE '%equity%' AND fund_category = ");
            builder.push_bind(category.clone());
        }
    }

    builder.push(" ORDER BY total_score DESC");
    builder
}

/// Raw row of the summary projection
#[derive(Debug, Clone, FromRow)]
pub struct FundSummaryRow {
    pub id: i64,
    pub kuvera_code: String,
    pub scheme_name: String,
    pub fund_house_name: Option<String>,
    pub fund_category: Option<String>,
    pub fund_type: Option<String>,
    pub returns_1d: Option<String>,
    pub returns_1w: Option<String>,
    pub returns_1y: Option<String>,
    pub returns_3y: Option<String>,
    pub returns_5y: Option<String>,
    pub returns_inception: Option<String>,
    pub total_score: Option<String>,
    pub aum: Option<String>,
    pub expense_ratio: Option<String>,
    pub fund_rating: Option<String>,
    pub last_updated: Option<String>,
    pub fund_house: Option<String>,
}

impl TryFrom<FundSummaryRow> for FundSummary {
    type Error = DatabaseError;

    fn try_from(row: FundSummaryRow) -> Result<Self, Self::Error> {
        let code = scheme_code(row.kuvera_code, row.id)?;
        let mut fund = FundSummary::new(row.id, code, row.scheme_name);
        fund.fund_house_name = row.fund_house_name;
        fund.fund_category = row.fund_category;
        fund.fund_type = row.fund_type;
        fund.returns_1d = Metric::from(row.returns_1d);
        fund.returns_1w = Metric::from(row.returns_1w);
        fund.returns_1y = Metric::from(row.returns_1y);
        fund.returns_3y = Metric::from(row.returns_3y);
        fund.returns_5y = Metric::from(row.returns_5y);
        fund.returns_inception = Metric::from(row.returns_inception);
        fund.total_score = Metric::from(row.total_score);
        fund.aum = Metric::from(row.aum);
        fund.expense_ratio = Metric::from(row.expense_ratio);
        fund.fund_rating = Metric::from(row.fund_rating);
        fund.last_updated = row.last_updated;
        fund.fund_house = row.fund_house;
        Ok(fund)
    }
}

/// Raw row of the detail projection
#[derive(Debug, Clone, FromRow)]
pub struct FundDetailRow {
    pub id: i64,
    pub kuvera_code: String,
    pub scheme_name: String,
    pub isin: Option<String>,
    pub fund_house: Option<String>,
    pub fund_house_name: Option<String>,
    pub fund_category: Option<String>,
    pub fund_type: Option<String>,
    pub lump_available: Option<String>,
    pub lump_min: Option<String>,
    pub sip_available: Option<String>,
    pub sip_min: Option<String>,
    pub lock_in_period: Option<String>,
    pub current_nav: Option<String>,
    pub current_nav_date: Option<String>,
    pub t1_nav: Option<String>,
    pub t1_nav_date: Option<String>,
    pub returns_1d: Option<String>,
    pub returns_1w: Option<String>,
    pub returns_1y: Option<String>,
    pub returns_3y: Option<String>,
    pub returns_5y: Option<String>,
    pub returns_inception: Option<String>,
    pub returns_date: Option<String>,
    pub start_date: Option<String>,
    pub expense_ratio: Option<String>,
    pub investment_objective: Option<String>,
    pub volatility: Option<String>,
    pub portfolio_turnover: Option<String>,
    pub aum: Option<String>,
    pub fund_rating: Option<String>,
    pub crisil_rating: Option<String>,
    pub total_score: Option<String>,
    pub score_updated: Option<String>,
    pub last_updated: Option<String>,
    pub created_at: Option<String>,
    pub fund_managers: Option<String>,
}

impl TryFrom<FundDetailRow> for FundDetail {
    type Error = DatabaseError;

    fn try_from(row: FundDetailRow) -> Result<Self, Self::Error> {
        let code = scheme_code(row.kuvera_code, row.id)?;
        let mut fund = FundDetail::new(row.id, code, row.scheme_name);
        fund.isin = row.isin;
        fund.fund_house = row.fund_house;
        fund.fund_house_name = row.fund_house_name;
        fund.fund_category = row.fund_category;
        fund.fund_type = row.fund_type;
        fund.lump_available = row.lump_available;
        fund.lump_min = Metric::from(row.lump_min);
        fund.sip_available = row.sip_available;
        fund.sip_min = Metric::from(row.sip_min);
        fund.lock_in_period = Metric::from(row.lock_in_period);
        fund.current_nav = Metric::from(row.current_nav);
        fund.current_nav_date = row.current_nav_date;
        fund.t1_nav = Metric::from(row.t1_nav);
        fund.t1_nav_date = row.t1_nav_date;
        fund.returns_1d = Metric::from(row.returns_1d);
        fund.returns_1w = Metric::from(row.returns_1w);
        fund.returns_1y = Metric::from(row.returns_1y);
        fund.returns_3y = Metric::from(row.returns_3y);
        fund.returns_5y = Metric::from(row.returns_5y);
        fund.returns_inception = Metric::from(row.returns_inception);
        fund.returns_date = row.returns_date;
        fund.start_date = row.start_date;
        fund.expense_ratio = Metric::from(row.expense_ratio);
        fund.investment_objective = row.investment_objective;
        fund.volatility = Metric::from(row.volatility);
        fund.portfolio_turnover = Metric::from(row.portfolio_turnover);
        fund.aum = Metric::from(row.aum);
        fund.fund_rating = Metric::from(row.fund_rating);
        fund.crisil_rating = row.crisil_rating;
        fund.total_score = Metric::from(row.total_score);
        fund.score_updated = row.score_updated;
        fund.last_updated = row.last_updated;
        fund.created_at = row.created_at;
        fund.fund_managers = parse_fund_managers(row.fund_managers.as_deref());
        Ok(fund)
    }
}

fn scheme_code(raw: String, id: i64) -> Result<SchemeCode, DatabaseError> {
    SchemeCode::new(raw)
        .map_err(|e| DatabaseError::SerializationError(format!("fund {id}: {e}")))
}

/// Maps list rows to summaries, dropping rows that cannot be mapped
///
/// One bad row must not hide the rest of the ranking, so failures are logged
/// and skipped.
fn summaries_from_rows(rows: Vec<FundSummaryRow>) -> Vec<FundSummary> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            FundSummary::try_from(row)
                .map_err(|e| warn!(id, error = %e, "Skipping malformed fund row"))
                .ok()
        })
        .collect()
}

/// Repository for reading fund records
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::FundRepository;
/// use domain_fund::{CategoryFilter, FundStore};
///
/// let repo = FundRepository::new(pool);
/// let funds = repo.list_funds(&CategoryFilter::Hybrid).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FundRepository {
    pool: PgPool,
}

impl FundRepository {
    /// Creates a new FundRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists scored funds for a category, highest score first
    #[instrument(skip(self), fields(category = %filter))]
    pub async fn fetch_list(&self, filter: &CategoryFilter) -> Result<Vec<FundSummary>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let mut query = list_query(filter);
        let rows = query
            .build_query_as::<FundSummaryRow>()
            .fetch_all(&mut *conn)
            .await?;

        debug!(rows = rows.len(), "Fetched fund list");
        Ok(summaries_from_rows(rows))
    }

    /// Fetches the full record for a scheme code
    #[instrument(skip(self), fields(code = %code))]
    pub async fn fetch_detail(&self, code: &SchemeCode) -> Result<Option<FundDetail>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, FundDetailRow>(DETAIL_SQL)
            .bind(code.as_str())
            .fetch_optional(&mut *conn)
            .await?;

        row.map(FundDetail::try_from).transpose()
    }

    /// Runs a trivial query to confirm the database is reachable
    pub async fn check_connection(&self) -> Result<(), DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}

#[async_trait]
impl FundStore for FundRepository {
    async fn list_funds(&self, filter: &CategoryFilter) -> Result<Vec<FundSummary>, StoreError> {
        self.fetch_list(filter).await.map_err(|e| {
            error!(error = %e, category = %filter, "Fund list query failed");
            StoreError::from(e)
        })
    }

    async fn find_fund(&self, code: &SchemeCode) -> Result<Option<FundDetail>, StoreError> {
        self.fetch_detail(code).await.map_err(|e| {
            error!(error = %e, code = %code, "Fund detail query failed");
            StoreError::from(e)
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_connection().await.map_err(|e| {
            error!(error = %e, "Database ping failed");
            StoreError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary_row() -> FundSummaryRow {
        FundSummaryRow {
            id: 42,
            kuvera_code: "LFGP-DG".to_string(),
            scheme_name: "Large Growth".to_string(),
            fund_house_name: Some("Axis Mutual Fund".to_string()),
            fund_category: Some("Large Cap Fund".to_string()),
            fund_type: Some("Equity".to_string()),
            returns_1d: Some("0.42".to_string()),
            returns_1w: None,
            returns_1y: Some("18.204".to_string()),
            returns_3y: Some("not a number".to_string()),
            returns_5y: None,
            returns_inception: None,
            total_score: Some("78.9".to_string()),
            aum: Some("45210.4".to_string()),
            expense_ratio: None,
            fund_rating: Some("4".to_string()),
            last_updated: None,
            fund_house: Some("AXIS".to_string()),
        }
    }

    #[test]
    fn test_list_query_all() {
        let query = list_query(&CategoryFilter::All);
        let sql = query.sql();
        assert!(sql.starts_with("SELECT"));
        assert!(sql.contains("FROM funds WHERE total_score IS NOT NULL ORDER BY total_score DESC"));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn test_list_query_hybrid_filters_type_only() {
        let query = list_query(&CategoryFilter::Hybrid);
        let sql = query.sql();
        assert!(sql.contains("AND fund_type ILIKE '%hybrid%'"));
        assert!(!sql.contains("fund_category ="));
    }

    #[test]
    fn test_list_query_equity_binds_category() {
        let query = list_query(&CategoryFilter::Equity("Mid Cap Fund'; DROP TABLE funds".to_string()));
        let sql = query.sql();
        assert!(sql.contains("AND fund_type ILIKE '%equity%' AND fund_category = $1"));
        assert!(!sql.contains("DROP TABLE"));
        assert!(sql.ends_with("ORDER BY total_score DESC"));
    }

    #[test]
    fn test_detail_sql_formats_timestamps() {
        for column in ["current_nav_date", "returns_date", "start_date", "score_updated", "last_updated"] {
            let expected = format!("to_char({column}, '{TIMESTAMP_PATTERN}') AS {column}");
            assert!(DETAIL_SQL.contains(&expected), "missing formatted column {column}");
        }
        assert!(DETAIL_SQL.contains("WHERE kuvera_code = $1"));
    }

    #[test]
    fn test_summary_row_maps_metrics() {
        let fund = FundSummary::try_from(summary_row()).unwrap();
        assert_eq!(fund.kuvera_code.as_str(), "LFGP-DG");
        assert_eq!(fund.returns_1y.value(), Some(dec!(18.204)));
        assert!(fund.returns_3y.is_missing());
        assert!(fund.returns_1w.is_missing());
        assert_eq!(fund.total_score.value(), Some(dec!(78.9)));
    }

    #[test]
    fn test_blank_code_is_malformed() {
        let mut row = summary_row();
        row.kuvera_code = "  ".to_string();
        let err = FundSummary::try_from(row).unwrap_err();
        assert!(matches!(err, DatabaseError::SerializationError(_)));
        assert!(matches!(StoreError::from(err), StoreError::Malformed(_)));
    }

    #[test]
    fn test_list_skips_rows_with_blank_code() {
        let mut blank = summary_row();
        blank.id = 43;
        blank.kuvera_code = String::new();

        let funds = summaries_from_rows(vec![summary_row(), blank]);

        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].id, 42);
    }
}
