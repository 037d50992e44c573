//! PostgreSQL-backed tests for the fund repository
//!
//! These start a database container and are ignored by default. Run them with
//! `cargo test -p infra_db -- --ignored` on a machine with Docker.

use core_kernel::SchemeCode;
use domain_fund::{CategoryFilter, FundStore};
use infra_db::{create_pool, DatabaseConfig, FundRepository};
use test_utils::{assert_all_match, assert_codes, assert_score_descending, FundFixtures, TestDatabase};

async fn seeded_repository() -> (TestDatabase, FundRepository) {
    let db = TestDatabase::new().await.expect("Failed to start test database");
    db.seed(&FundFixtures::all_details())
        .await
        .expect("Failed to seed funds");

    let pool = create_pool(DatabaseConfig::new(db.config.connection_url()).max_connections(2).min_connections(1))
        .await
        .expect("Failed to create pool");
    (db, FundRepository::new(pool))
}

// ============================================================================
// List Tests
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_equity_category() {
        let (_db, repo) = seeded_repository().await;
        let filter = CategoryFilter::from_token(Some("Large Cap Fund"));

        let funds = repo.list_funds(&filter).await.unwrap();

        assert_codes(&funds, &["AXIS-LC-DG", "HDFC-LC-DG"]);
        assert_all_match(&funds, &filter);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_hybrid_and_all() {
        let (_db, repo) = seeded_repository().await;

        let hybrid = repo.list_funds(&CategoryFilter::Hybrid).await.unwrap();
        assert_codes(&hybrid, &["ICICI-BAF-DG"]);

        let all = repo.list_funds(&CategoryFilter::All).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_score_descending(&all);
        assert_all_match(&all, &CategoryFilter::All);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_blank_code_row_is_skipped() {
        let (db, repo) = seeded_repository().await;
        sqlx::query(
            "INSERT INTO funds (kuvera_code, scheme_name, fund_type, fund_category, total_score) \
             VALUES ('', 'Blank', 'Debt', 'Gilt', 10)",
        )
        .execute(db.pool())
        .await
        .expect("Failed to insert blank-code row");

        let all = repo.list_funds(&CategoryFilter::All).await.unwrap();

        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|f| f.scheme_name != "Blank"));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_metrics_survive_numeric_columns() {
        let (_db, repo) = seeded_repository().await;
        let funds = repo.list_funds(&CategoryFilter::from_token(Some("Large Cap Fund"))).await.unwrap();

        let expected = FundFixtures::large_cap_detail();
        assert_eq!(funds[0].returns_1y.value(), expected.returns_1y.value());
        assert_eq!(funds[0].total_score.value(), expected.total_score.value());
    }
}

// ============================================================================
// Detail Tests
// ============================================================================

mod detail_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_detail_formats_timestamps() {
        let (_db, repo) = seeded_repository().await;
        let code = SchemeCode::new("AXIS-LC-DG").unwrap();

        let fund = repo.find_fund(&code).await.unwrap().expect("fund should exist");

        assert_eq!(fund.current_nav_date.as_deref(), Some("2024-06-14 00:00:00.000000"));
        assert_eq!(fund.last_updated.as_deref(), Some("2024-06-15 18:30:00.000000"));
        assert_eq!(fund.returns_date, None);
        let managers: Vec<_> = fund.fund_managers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(managers, vec!["Shreyash Devalkar", "Ashish Naik"]);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_unknown_code_is_none() {
        let (_db, repo) = seeded_repository().await;
        let code = SchemeCode::new("MISSING").unwrap();
        assert!(repo.find_fund(&code).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_ping() {
        let (_db, repo) = seeded_repository().await;
        assert!(repo.ping().await.is_ok());
    }
}
