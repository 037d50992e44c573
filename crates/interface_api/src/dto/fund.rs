//! Fund DTOs

use serde::Serialize;

/// Raw query-string pairs in request order
///
/// Extracting pairs never rejects a request, so repeated or unexpected keys
/// reach the handler instead of producing a plain-text 400.
pub type QueryPairs = Vec<(String, String)>;

/// Returns the first value given for `key`
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Query string of the fund list route
#[derive(Debug, Default)]
pub struct FundListQuery {
    /// Category token: an equity category name, "hybrid", or "all"
    pub category: Option<String>,
}

impl FundListQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            category: first_value(pairs, "category"),
        }
    }
}

/// Query string of the rankings route
#[derive(Debug, Default)]
pub struct RankingsQuery {
    pub category: Option<String>,
    /// Column to sort by; score-descending order when absent
    pub sort: Option<String>,
    /// "desc" or "asc"; defaults to "desc"
    pub direction: Option<String>,
}

impl RankingsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            category: first_value(pairs, "category"),
            sort: first_value(pairs, "sort"),
            direction: first_value(pairs, "direction"),
        }
    }
}

/// Envelope for list responses
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Envelope for single-record responses
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_value_wins_for_repeated_keys() {
        let query = FundListQuery::from_pairs(&pairs(&[("category", "hybrid"), ("category", "all")]));
        assert_eq!(query.category.as_deref(), Some("hybrid"));
    }

    #[test]
    fn test_rankings_query_ignores_unknown_keys() {
        let query = RankingsQuery::from_pairs(&pairs(&[("page", "2"), ("sort", "returns_1y")]));
        assert_eq!(query.sort.as_deref(), Some("returns_1y"));
        assert!(query.category.is_none());
        assert!(query.direction.is_none());
    }
}
