//! Strongly-typed identifiers for fund records
//!
//! Funds are keyed by the provider's scheme code (e.g. `"LFGP-DG"`). Wrapping
//! it in a newtype keeps it from being mixed up with names or categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The unique scheme code of a fund (`kuvera_code` in storage)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeCode(String);

impl SchemeCode {
    /// Creates a scheme code, rejecting blank input
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CoreError::validation("scheme code must not be empty"));
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the code, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SchemeCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SchemeCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_kept_verbatim() {
        let code: SchemeCode = "LFGP-DG".parse().unwrap();
        assert_eq!(code.as_str(), "LFGP-DG");
        assert_eq!(code.to_string(), "LFGP-DG");
    }

    #[test]
    fn test_blank_code_rejected() {
        assert!(SchemeCode::new("   ").is_err());
    }
}
