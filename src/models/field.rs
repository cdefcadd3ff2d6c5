//! Search fields and boolean connectives.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::query::QueryError;

/// Searchable arXiv metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Author,
    Abstract,
    Comment,
    Journal,
    Category,
    Report,
    All,
}

impl Field {
    /// Every searchable field
    pub const ALL: &'static [Field] = &[
        Field::Title,
        Field::Author,
        Field::Abstract,
        Field::Comment,
        Field::Journal,
        Field::Category,
        Field::Report,
        Field::All,
    ];

    /// Short field code used in `search_query` terms
    pub fn api_token(self) -> &'static str {
        match self {
            Field::Title => "ti",
            Field::Author => "au",
            Field::Abstract => "abs",
            Field::Comment => "co",
            Field::Journal => "jr",
            Field::Category => "cat",
            Field::Report => "rn",
            Field::All => "all",
        }
    }

    /// Option key used in dynamic input
    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Abstract => "abstract",
            Field::Comment => "comment",
            Field::Journal => "journal",
            Field::Category => "category",
            Field::Report => "report",
            Field::All => "all",
        }
    }
}

impl FromStr for Field {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| QueryError::UnrecognizedOption {
                option: "field".to_string(),
                value: s.to_string(),
            })
    }
}

/// Boolean operator joining two search terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
    #[default]
    And,
    Or,
    AndNot,
}

impl Connective {
    /// Every supported connective
    pub const ALL: &'static [Connective] = &[Connective::And, Connective::Or, Connective::AndNot];

    /// Operator token as the API spells it
    pub fn api_token(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
            Connective::AndNot => "ANDNOT",
        }
    }

    /// Option key used in dynamic input
    pub fn key(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
            Connective::AndNot => "and_not",
        }
    }
}

impl FromStr for Connective {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Connective::ALL
            .iter()
            .copied()
            .find(|connective| connective.key() == s)
            .ok_or_else(|| QueryError::UnrecognizedOption {
                option: "connective".to_string(),
                value: s.to_string(),
            })
    }
}

/// Options for a single field operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Wrap each value in quotes for an exact phrase match
    #[serde(default = "default_true")]
    pub exact: bool,

    /// Operator joining the values of a multi-value term
    #[serde(default)]
    pub connective: Connective,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            exact: true,
            connective: Connective::And,
        }
    }
}

fn default_true() -> bool {
    true
}

impl FieldOptions {
    /// Create options with exact matching and AND-joined values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable exact phrase matching
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Set the operator joining multiple values
    pub fn connective(mut self, connective: Connective) -> Self {
        self.connective = connective;
        self
    }
}
