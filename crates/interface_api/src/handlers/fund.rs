//! Fund handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use core_kernel::SchemeCode;
use domain_fund::{
    CategoryFilter, FundDetail, FundDetailView, FundRowView, FundSummary, SortDirection, SortKey, SortState,
};
use tracing::{debug, error, instrument};

use crate::dto::fund::*;
use crate::error::{ApiError, DETAIL_FAILED, FUND_NOT_FOUND, LIST_FAILED};
use crate::AppState;

/// Lists scored funds for a category, highest score first
#[instrument(skip(state))]
pub async fn list_funds(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<ListResponse<FundSummary>>, ApiError> {
    let query = FundListQuery::from_pairs(&pairs);
    let filter = CategoryFilter::from_token(query.category.as_deref());
    let funds = fetch_list(&state, &filter).await?;
    Ok(Json(ListResponse::new(funds)))
}

/// Gets the full record for a scheme code
#[instrument(skip(state))]
pub async fn get_fund(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DataResponse<FundDetail>>, ApiError> {
    let fund = fetch_detail(&state, code).await?;
    Ok(Json(DataResponse::new(fund)))
}

/// Gets the formatted fund page for a scheme code
#[instrument(skip(state))]
pub async fn get_fund_display(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DataResponse<FundDetailView>>, ApiError> {
    let fund = fetch_detail(&state, code).await?;
    let view = FundDetailView::new(&fund, &state.config.amc_logo_base_url);
    Ok(Json(DataResponse::new(view)))
}

/// Lists formatted, ranked rows for a category
///
/// Rows are sorted by `sort` in `direction`, or by score when no column is
/// given. Ranks follow the sorted order.
#[instrument(skip(state))]
pub async fn rankings(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<ListResponse<FundRowView>>, ApiError> {
    let query = RankingsQuery::from_pairs(&pairs);
    let sort = sort_state(&query)?;
    let filter = CategoryFilter::from_token(query.category.as_deref());
    let funds = fetch_list(&state, &filter).await?;

    let rows = FundRowView::from_sorted(&sort.sorted_copy(&funds), &state.config.amc_logo_base_url);
    Ok(Json(ListResponse::new(rows)))
}

fn sort_state(query: &RankingsQuery) -> Result<SortState, ApiError> {
    let Some(key) = query.sort.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(SortState::unsorted());
    };

    let key: SortKey = key.parse()?;
    let direction = match query.direction.as_deref().filter(|s| !s.is_empty()) {
        Some(direction) => direction.parse()?,
        None => SortDirection::Descending,
    };
    Ok(SortState::sorted(key, direction))
}

async fn fetch_list(state: &AppState, filter: &CategoryFilter) -> Result<Vec<FundSummary>, ApiError> {
    let funds = state.store.list_funds(filter).await.map_err(|e| {
        error!(error = %e, category = %filter, "Error fetching funds");
        ApiError::failed(LIST_FAILED, &e)
    })?;

    debug!(count = funds.len(), category = %filter, "Fetched funds");
    Ok(funds)
}

async fn fetch_detail(state: &AppState, code: String) -> Result<FundDetail, ApiError> {
    let Ok(code) = SchemeCode::new(code) else {
        return Err(ApiError::NotFound(FUND_NOT_FOUND.to_string()));
    };

    match state.store.find_fund(&code).await {
        Ok(Some(fund)) => Ok(fund),
        Ok(None) => {
            debug!(code = %code, "Fund not found");
            Err(ApiError::NotFound(FUND_NOT_FOUND.to_string()))
        }
        Err(e) => {
            error!(error = %e, code = %code, "Error fetching fund details");
            Err(ApiError::failed(DETAIL_FAILED, &e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(sort: Option<&str>, direction: Option<&str>) -> RankingsQuery {
        RankingsQuery {
            category: None,
            sort: sort.map(str::to_string),
            direction: direction.map(str::to_string),
        }
    }

    #[test]
    fn test_sort_state_defaults_to_unsorted() {
        assert_eq!(sort_state(&query(None, None)).unwrap(), SortState::unsorted());
        assert_eq!(sort_state(&query(Some(""), Some("asc"))).unwrap(), SortState::unsorted());
    }

    #[test]
    fn test_sort_state_first_click_is_descending() {
        let state = sort_state(&query(Some("returns_1y"), None)).unwrap();
        assert_eq!(state.active(), Some((SortKey::Returns1y, SortDirection::Descending)));
    }

    #[test]
    fn test_sort_state_rejects_unknown_values() {
        assert!(matches!(sort_state(&query(Some("aum"), None)), Err(ApiError::BadRequest(_))));
        assert!(matches!(sort_state(&query(Some("total_score"), Some("up"))), Err(ApiError::BadRequest(_))));
    }
}
