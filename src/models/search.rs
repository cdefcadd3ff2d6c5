//! Sort options and construction-time query options.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::query::QueryError;

/// Sort field for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Relevance,
    LastUpdated,
    DateSubmitted,
}

impl SortBy {
    /// Every recognized sort field
    pub const ALL: &'static [SortBy] = &[SortBy::Relevance, SortBy::LastUpdated, SortBy::DateSubmitted];

    /// Token the arXiv API expects for `sortBy`
    pub fn api_token(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::LastUpdated => "lastUpdatedDate",
            SortBy::DateSubmitted => "submittedDate",
        }
    }

    /// Option key used in dynamic input
    pub fn key(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::LastUpdated => "last_updated",
            SortBy::DateSubmitted => "date_submitted",
        }
    }
}

impl FromStr for SortBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .iter()
            .copied()
            .find(|sort| sort.key() == s)
            .ok_or_else(|| QueryError::UnrecognizedOption {
                option: "sort_by".to_string(),
                value: s.to_string(),
            })
    }
}

/// Sort order for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Every recognized sort order
    pub const ALL: &'static [SortOrder] = &[SortOrder::Ascending, SortOrder::Descending];

    /// Token the arXiv API expects for `sortOrder`
    pub fn api_token(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }

    /// Option key used in dynamic input
    pub fn key(self) -> &'static str {
        self.api_token()
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .iter()
            .copied()
            .find(|order| order.key() == s)
            .ok_or_else(|| QueryError::UnrecognizedOption {
                option: "sort_order".to_string(),
                value: s.to_string(),
            })
    }
}

/// Construction-time options for a [`Query`](crate::query::Query)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Sort by field
    #[serde(default)]
    pub sort_by: SortBy,

    /// Sort order
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl QueryOptions {
    /// Create options with the API defaults (relevance, descending)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set sort by
    pub fn sort_by(mut self, sort: SortBy) -> Self {
        self.sort_by = sort;
        self
    }

    /// Set sort order
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Parse options from loosely typed input such as a JSON request body.
    ///
    /// Every entry must be a string tag. A value of any other kind fails with
    /// [`QueryError::InvalidOptionType`]; a tag (or option name) outside the
    /// recognized set fails with [`QueryError::UnrecognizedOption`]. `null`
    /// and missing entries take the defaults.
    pub fn from_value(value: &Value) -> Result<Self, QueryError> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(QueryError::InvalidOptionType {
                    option: "options".to_string(),
                    expected: "object",
                    found: value_kind(other),
                })
            }
        };

        let mut options = Self::default();
        for (name, entry) in map {
            match name.as_str() {
                "sort_by" => {
                    if let Some(tag) = option_tag(name, entry)? {
                        options.sort_by = tag.parse()?;
                    }
                }
                "sort_order" => {
                    if let Some(tag) = option_tag(name, entry)? {
                        options.sort_order = tag.parse()?;
                    }
                }
                _ => {
                    return Err(QueryError::UnrecognizedOption {
                        option: "options".to_string(),
                        value: name.clone(),
                    })
                }
            }
        }

        Ok(options)
    }
}

fn option_tag<'a>(option: &str, entry: &'a Value) -> Result<Option<&'a str>, QueryError> {
    match entry {
        Value::Null => Ok(None),
        Value::String(tag) => Ok(Some(tag.as_str())),
        other => Err(QueryError::InvalidOptionType {
            option: option.to_string(),
            expected: "string tag",
            found: value_kind(other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
