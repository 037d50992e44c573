//! Database Test Utilities
//!
//! Provides helpers for database testing including testcontainer management,
//! schema setup, and seeding of fund rows for integration tests.

use domain_fund::FundDetail;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

/// Default PostgreSQL image for testing
const POSTGRES_IMAGE: &str = "postgres";
const POSTGRES_TAG: &str = "16-alpine";
const POSTGRES_USER: &str = "test_user";
const POSTGRES_PASSWORD: &str = "test_password";
const POSTGRES_DB: &str = "funds_test";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Configuration for test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl Default for TestDatabaseConfig {
    fn default() -> Self {
        Self {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

impl TestDatabaseConfig {
    /// Creates the database connection URL
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// A wrapper around a PostgreSQL test container
pub struct TestDatabase {
    _container: ContainerAsync<GenericImage>,
    pub config: TestDatabaseConfig,
    pub pool: PgPool,
}

impl TestDatabase {
    /// Starts a new PostgreSQL container with the funds schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or schema fails to initialize
    pub async fn new() -> Result<Self, BoxError> {
        let container = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
            .with_exposed_port(5432.tcp())
            .with_wait_for(WaitFor::message_on_stderr("database system is ready to accept connections"))
            .with_env_var("POSTGRES_USER", POSTGRES_USER)
            .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
            .with_env_var("POSTGRES_DB", POSTGRES_DB)
            .start()
            .await?;

        let port = container.get_host_port_ipv4(5432).await?;
        let host = container.get_host().await?.to_string();

        let config = TestDatabaseConfig {
            host,
            port,
            ..TestDatabaseConfig::default()
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&config.connection_url())
            .await?;

        let test_db = Self {
            _container: container,
            config,
            pool,
        };

        test_db.init_schema().await?;

        Ok(test_db)
    }

    async fn init_schema(&self) -> Result<(), BoxError> {
        let schema = include_str!("../../../migrations/20240101_000001_funds.sql");
        sqlx::raw_sql(schema).execute(&self.pool).await?;
        Ok(())
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Inserts a fund row
    ///
    /// Timestamp fields are read as `YYYY-MM-DD HH:MM:SS` text and cast by
    /// the database; `id` and `created_at` are assigned by the database.
    pub async fn insert_fund(&self, fund: &FundDetail) -> Result<(), BoxError> {
        let managers = serde_json::to_string(&fund.fund_managers)?;

        sqlx::query(
            r#"
            INSERT INTO funds (
                kuvera_code, scheme_name, isin, fund_house, fund_house_name,
                fund_category, fund_type, lump_available, lump_min, sip_available,
                sip_min, lock_in_period, current_nav, current_nav_date, t1_nav,
                t1_nav_date, returns_1d, returns_1w, returns_1y, returns_3y,
                returns_5y, returns_inception, returns_date, start_date, expense_ratio,
                investment_objective, volatility, portfolio_turnover, aum, fund_rating,
                crisil_rating, fund_managers, total_score, score_updated, last_updated
            )
            VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8, $9, $10,
                $11, $12, $13, $14::timestamp, $15,
                $16::date, $17, $18, $19, $20,
                $21, $22, $23::timestamp, $24::timestamp, $25,
                $26, $27, $28, $29, $30,
                $31, $32::jsonb, $33, $34::timestamp, $35::timestamp
            )
            "#,
        )
        .bind(fund.kuvera_code.as_str())
        .bind(&fund.scheme_name)
        .bind(&fund.isin)
        .bind(&fund.fund_house)
        .bind(&fund.fund_house_name)
        .bind(&fund.fund_category)
        .bind(&fund.fund_type)
        .bind(&fund.lump_available)
        .bind(fund.lump_min.value())
        .bind(&fund.sip_available)
        .bind(fund.sip_min.value())
        .bind(fund.lock_in_period.value())
        .bind(fund.current_nav.value())
        .bind(&fund.current_nav_date)
        .bind(fund.t1_nav.value())
        .bind(&fund.t1_nav_date)
        .bind(fund.returns_1d.value())
        .bind(fund.returns_1w.value())
        .bind(fund.returns_1y.value())
        .bind(fund.returns_3y.value())
        .bind(fund.returns_5y.value())
        .bind(fund.returns_inception.value())
        .bind(&fund.returns_date)
        .bind(&fund.start_date)
        .bind(fund.expense_ratio.value())
        .bind(&fund.investment_objective)
        .bind(fund.volatility.value())
        .bind(fund.portfolio_turnover.value())
        .bind(fund.aum.value())
        .bind(fund.fund_rating.value())
        .bind(&fund.crisil_rating)
        .bind(managers)
        .bind(fund.total_score.value())
        .bind(&fund.score_updated)
        .bind(&fund.last_updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts every fund in order
    pub async fn seed(&self, funds: &[FundDetail]) -> Result<(), BoxError> {
        for fund in funds {
            self.insert_fund(fund).await?;
        }
        Ok(())
    }
}
