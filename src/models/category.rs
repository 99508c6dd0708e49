//! Expense category model
//!
//! Categories form a closed set: an expense is only accepted when its
//! category names one of the allowed variants. Matching is exact and
//! case-sensitive, so "Food" is rejected while "food" is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An allowed expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Travel,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// All allowed categories, in display order
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Travel,
        Self::Bills,
        Self::Entertainment,
        Self::Other,
    ];

    /// Get the canonical name for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Travel => "travel",
            Self::Bills => "bills",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    /// Check whether a name belongs to the allowed set
    pub fn is_allowed(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError::new(s))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError {
    name: String,
}

impl CategoryParseError {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected category name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not an allowed category", self.name)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_names() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("bills".parse::<Category>().unwrap(), Category::Bills);
        assert_eq!(
            "entertainment".parse::<Category>().unwrap(),
            Category::Entertainment
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "party".parse::<Category>().unwrap_err();
        assert_eq!(err.name(), "party");
        assert_eq!(err.to_string(), "'party' is not an allowed category");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Food".parse::<Category>().is_err());
        assert!("FOOD".parse::<Category>().is_err());
    }

    #[test]
    fn test_is_allowed() {
        assert!(Category::is_allowed("travel"));
        assert!(!Category::is_allowed("rent"));
        assert!(!Category::is_allowed(""));
    }

    #[test]
    fn test_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(
                category.to_string().parse::<Category>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");

        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Category::Entertainment);
    }
}
