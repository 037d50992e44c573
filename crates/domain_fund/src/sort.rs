//! Sorting of the rankings table
//!
//! Sorting always works on an in-memory copy of a list result. Without an
//! active key the table is ordered by score, highest first. Clicking a column
//! header cycles it through descending, ascending and back to unsorted.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use core_kernel::Metric;
use serde::{Deserialize, Serialize};

use crate::error::FundError;
use crate::fund::FundSummary;

/// A sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    SchemeName,
    TotalScore,
    #[serde(rename = "returns_1d")]
    Returns1d,
    #[serde(rename = "returns_1w")]
    Returns1w,
    #[serde(rename = "returns_1y")]
    Returns1y,
    #[serde(rename = "returns_3y")]
    Returns3y,
    #[serde(rename = "returns_5y")]
    Returns5y,
}

impl SortKey {
    /// All sortable columns
    pub const ALL: [SortKey; 7] = [
        SortKey::SchemeName,
        SortKey::TotalScore,
        SortKey::Returns1d,
        SortKey::Returns1w,
        SortKey::Returns1y,
        SortKey::Returns3y,
        SortKey::Returns5y,
    ];

    /// Column name as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::SchemeName => "scheme_name",
            SortKey::TotalScore => "total_score",
            SortKey::Returns1d => "returns_1d",
            SortKey::Returns1w => "returns_1w",
            SortKey::Returns1y => "returns_1y",
            SortKey::Returns3y => "returns_3y",
            SortKey::Returns5y => "returns_5y",
        }
    }

    /// Returns the numeric column for this key, `None` for the name column
    pub fn metric(&self, fund: &FundSummary) -> Option<Metric> {
        match self {
            SortKey::SchemeName => None,
            SortKey::TotalScore => Some(fund.total_score),
            SortKey::Returns1d => Some(fund.returns_1d),
            SortKey::Returns1w => Some(fund.returns_1w),
            SortKey::Returns1y => Some(fund.returns_1y),
            SortKey::Returns3y => Some(fund.returns_3y),
            SortKey::Returns5y => Some(fund.returns_5y),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FundError::UnknownSortKey(s.to_string()))
    }
}

/// Direction of an active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "desc")]
    Descending,
    #[serde(rename = "asc")]
    Ascending,
}

impl FromStr for SortDirection {
    type Err = FundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desc" | "descending" => Ok(SortDirection::Descending),
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            _ => Err(FundError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// The active sort of the rankings table
///
/// At most one column is sorted at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(SortKey, SortDirection)>,
}

impl SortState {
    /// The default, score-descending order
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// A state with `key` sorted in `direction`
    pub fn sorted(key: SortKey, direction: SortDirection) -> Self {
        Self {
            active: Some((key, direction)),
        }
    }

    /// Returns the active column and direction, if any
    pub fn active(&self) -> Option<(SortKey, SortDirection)> {
        self.active
    }

    /// Returns the direction shown on `key`'s header, if it is the active column
    pub fn direction_of(&self, key: SortKey) -> Option<SortDirection> {
        self.active.filter(|(k, _)| *k == key).map(|(_, d)| d)
    }

    /// Applies a header click on `key`
    ///
    /// A different column always starts descending. The same column cycles
    /// descending → ascending → unsorted.
    pub fn toggle(self, key: SortKey) -> Self {
        let active = match self.active {
            Some((current, SortDirection::Descending)) if current == key => {
                Some((key, SortDirection::Ascending))
            }
            Some((current, SortDirection::Ascending)) if current == key => None,
            _ => Some((key, SortDirection::Descending)),
        };
        Self { active }
    }

    /// Sorts `funds` in place according to this state
    ///
    /// The sort is stable; missing numbers compare as zero.
    pub fn sort(&self, funds: &mut [FundSummary]) {
        match self.active {
            None => funds.sort_by(|a, b| compare_metric(b.total_score, a.total_score)),
            Some((SortKey::SchemeName, direction)) => funds.sort_by(|a, b| {
                apply_direction(compare_names(&a.scheme_name, &b.scheme_name), direction)
            }),
            Some((key, direction)) => funds.sort_by(|a, b| {
                let ordering = match (key.metric(a), key.metric(b)) {
                    (Some(x), Some(y)) => compare_metric(x, y),
                    _ => Ordering::Equal,
                };
                apply_direction(ordering, direction)
            }),
        }
    }

    /// Returns a sorted copy of `funds`
    pub fn sorted_copy(&self, funds: &[FundSummary]) -> Vec<FundSummary> {
        let mut rows = funds.to_vec();
        self.sort(&mut rows);
        rows
    }
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Compares two metrics, treating missing as zero
pub fn compare_metric(a: Metric, b: Metric) -> Ordering {
    a.or_zero().cmp(&b.or_zero())
}

/// Compares fund names case-insensitively, with digit runs compared by value
///
/// `"Fund 9"` sorts before `"Fund 10"`, and `"alpha"` equals `"ALPHA"`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ordering = compare_digit_runs(&l_run, &r_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(ch) = chars.next_if(|c| c.is_ascii_digit()) {
        run.push(ch);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
