//! Category entity and identifier

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a [`Category`] (Value Object)
///
/// Callers are loose about the shape of category ids: the quiz front end
/// sends them as strings (`"4"`), the create form as either. Deserialization
/// therefore accepts a JSON number or a numeric-looking string and always
/// serializes back to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Zero never names a stored category; callers use it for "all" or "unset".
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Error returned when a category id string is not a non-negative integer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("category id must be a non-negative integer, got {0:?}")]
pub struct ParseCategoryIdError(String);

impl FromStr for CategoryId {
    type Err = ParseCategoryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(CategoryId)
            .map_err(|_| ParseCategoryIdError(s.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawCategoryId::deserialize(deserializer)? {
            RawCategoryId::Number(n) => Ok(CategoryId(n)),
            RawCategoryId::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// A question category (Entity)
///
/// Read-only from the engine's point of view: categories are seeded into
/// the store and never created or deleted through the use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Human-readable label, serialized as `type` for wire compatibility
    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_from_number_and_string() {
        let from_number: CategoryId = serde_json::from_str("4").unwrap();
        let from_string: CategoryId = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(from_number, CategoryId::new(4));
        assert_eq!(from_string, CategoryId::new(4));
    }

    #[test]
    fn test_category_id_rejects_non_numeric_string() {
        let result: Result<CategoryId, _> = serde_json::from_str("\"history\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_category_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&CategoryId::new(2)).unwrap(), "2");
    }

    #[test]
    fn test_category_id_parse_trims() {
        assert_eq!(" 3 ".parse::<CategoryId>().unwrap(), CategoryId::new(3));
        assert!("-1".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_category_serializes_label_as_type() {
        let json = serde_json::to_value(Category::new(2, "Art")).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["type"], "Art");
    }
}
