//! Builder for arXiv API query strings.
//!
//! A [`Query`] is created once with its sort options and optional list of
//! paper IDs, then grows a `search_query` expression through chained field and
//! connective calls:
//!
//! ```rust
//! use arx_query::query::Query;
//!
//! # fn main() -> Result<(), arx_query::query::QueryError> {
//! let query = Query::default()
//!     .title(["neural networks"])?
//!     .or()
//!     .category(["cs.AI", "cs.LG"])?;
//!
//! assert_eq!(
//!     query.to_string(),
//!     "sortBy=relevance&sortOrder=descending&search_query=ti:%22neural networks%22+OR+%28cat:%22cs.AI%22+AND+cat:%22cs.LG%22%29"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Consecutive field calls are joined with an implicit `AND`. A connective is
//! only recorded when a term precedes it, and at most one connective can be
//! pending at a time: further connectives are ignored until the next term
//! consumes it.

pub mod encode;
mod error;

use std::fmt;
use url::Url;

use crate::config::QueryConfig;
use crate::models::{Connective, Field, FieldOptions, QueryOptions, SortBy, SortOrder};
use encode::{encode, enquote, parenthesize};

pub use error::QueryError;

/// State of the end of the `search_query` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tail {
    /// No terms yet
    #[default]
    Empty,
    /// Ends in a completed term
    Term,
    /// Ends in a connective awaiting the next term
    Pending(Connective),
}

/// arXiv API query string builder
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    sort_by: SortBy,
    sort_order: SortOrder,
    ids: Vec<String>,
    /// Committed terms, without any pending connective
    terms: String,
    tail: Tail,
}

impl Query {
    /// Create a query without paper IDs
    pub fn new(options: QueryOptions) -> Self {
        Self::with_ids(Vec::<String>::new(), options)
    }

    /// Create a query restricted to the given paper IDs, kept in order
    pub fn with_ids<I, S>(ids: I, options: QueryOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        tracing::trace!(
            sort_by = options.sort_by.api_token(),
            sort_order = options.sort_order.api_token(),
            ids = ids.len(),
            "Creating query"
        );

        Self {
            sort_by: options.sort_by,
            sort_order: options.sort_order,
            ids,
            terms: String::new(),
            tail: Tail::Empty,
        }
    }

    /// Create a query from loosely typed options (e.g. a JSON object with
    /// `sort_by` / `sort_order` tags). Options are validated before anything
    /// is built.
    pub fn with_options<I, S>(ids: I, options: &serde_json::Value) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = QueryOptions::from_value(options)?;
        Ok(Self::with_ids(ids, options))
    }

    /// Create a query using the sort defaults from configuration
    pub fn from_config<I, S>(ids: I, config: &QueryConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_ids(ids, config.query_options())
    }

    /// Sort field
    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// Sort order
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Paper IDs in the order they were given
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Current tail state of the search expression
    pub fn tail(&self) -> Tail {
        self.tail
    }

    /// Encoded `search_query` value, including a pending connective if any
    pub fn search_query(&self) -> String {
        match self.tail {
            Tail::Pending(connective) => {
                format!("{}{}{}", self.terms, encode(" "), connective.api_token())
            }
            Tail::Empty | Tail::Term => self.terms.clone(),
        }
    }

    // ========== CONNECTIVES ==========

    /// Record a pending connective after the last term.
    ///
    /// Ignored when there is no term yet, or when a connective is already
    /// pending (the first one wins).
    pub fn connective(mut self, connective: Connective) -> Self {
        match self.tail {
            Tail::Empty => {
                tracing::debug!(connective = connective.api_token(), "No terms to connect - ignoring");
            }
            Tail::Pending(pending) => {
                tracing::debug!(
                    connective = connective.api_token(),
                    pending = pending.api_token(),
                    "Connective already pending - ignoring"
                );
            }
            Tail::Term => self.tail = Tail::Pending(connective),
        }
        self
    }

    /// Join the next term with `AND`
    pub fn and(self) -> Self {
        self.connective(Connective::And)
    }

    /// Join the next term with `OR`
    pub fn or(self) -> Self {
        self.connective(Connective::Or)
    }

    /// Join the next term with `ANDNOT`
    pub fn and_not(self) -> Self {
        self.connective(Connective::AndNot)
    }

    // ========== FIELDS ==========

    /// Add a search term on `field`.
    ///
    /// Each value becomes `code:value` (quoted when `options.exact`). Several
    /// values are joined with `options.connective` and parenthesized as one
    /// term. The term is joined to the previous one by the pending connective,
    /// or by `AND` when none is pending.
    pub fn field<I, S>(self, field: Field, values: I, options: FieldOptions) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let code = field.api_token();
        let terms: Vec<String> = values
            .into_iter()
            .map(|value| {
                let value = value.as_ref();
                if options.exact {
                    format!("{}:{}", code, enquote(value))
                } else {
                    format!("{}:{}", code, value)
                }
            })
            .collect();

        let term = match terms.len() {
            0 => {
                return Err(QueryError::InvalidArgument(format!(
                    "{} requires at least one value",
                    field.key()
                )))
            }
            1 => terms.concat(),
            _ => {
                let separator = encode(&format!(" {} ", options.connective.api_token()));
                parenthesize(&terms.join(&separator))
            }
        };

        Ok(self.push_term(&term))
    }

    /// Search titles
    pub fn title<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::Title, values, FieldOptions::default())
    }

    /// Search author names
    pub fn author<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::Author, values, FieldOptions::default())
    }

    /// Search abstracts
    pub fn r#abstract<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::Abstract, values, FieldOptions::default())
    }

    /// Search author comments
    pub fn comment<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::Comment, values, FieldOptions::default())
    }

    /// Search journal references
    pub fn journal<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::Journal, values, FieldOptions::default())
    }

    /// Search subject categories (e.g. `cs.AI`)
    pub fn category<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::Category, values, FieldOptions::default())
    }

    /// Search report numbers
    pub fn report<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::Report, values, FieldOptions::default())
    }

    /// Search all fields
    pub fn all<I, S>(self, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field(Field::All, values, FieldOptions::default())
    }

    // ========== GROUPING ==========

    /// Add a parenthesized sub-expression built by `build`.
    ///
    /// `build` receives an empty query; only its terms are used. The group is
    /// inserted like a single field term. An empty group adds nothing, and a
    /// connective left pending inside the group is dropped.
    pub fn group<F>(self, build: F) -> Result<Self, QueryError>
    where
        F: FnOnce(Query) -> Result<Query, QueryError>,
    {
        let inner = build(Query::default())?;
        if inner.terms.is_empty() {
            tracing::debug!("Empty group - ignoring");
            return Ok(self);
        }
        if let Tail::Pending(dangling) = inner.tail {
            tracing::debug!(
                connective = dangling.api_token(),
                "Dropping trailing connective inside group"
            );
        }
        Ok(self.push_term(&parenthesize(&inner.terms)))
    }

    fn push_term(mut self, term: &str) -> Self {
        match self.tail {
            Tail::Empty => self.terms.push_str(term),
            Tail::Term => {
                self.terms.push_str(&encode(" AND "));
                self.terms.push_str(term);
            }
            Tail::Pending(connective) => {
                self.terms
                    .push_str(&encode(&format!(" {} ", connective.api_token())));
                self.terms.push_str(term);
            }
        }
        tracing::debug!(tail = ?self.tail, term, "Added search term");
        self.tail = Tail::Term;
        self
    }

    // ========== URL ==========

    /// Attach the serialized query to an API base URL.
    ///
    /// Parameters already on `base` are kept ahead of the query's own.
    pub fn to_url(&self, base: &str) -> Result<Url, QueryError> {
        let mut url = Url::parse(base)?;
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, self),
            _ => self.to_string(),
        };
        url.set_query(Some(&query));
        Ok(url)
    }

    /// Attach the serialized query to the configured API URL
    pub fn url(&self, config: &QueryConfig) -> Result<Url, QueryError> {
        self.to_url(&config.api_url)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sortBy={}&sortOrder={}",
            self.sort_by.api_token(),
            self.sort_order.api_token()
        )?;
        if self.tail != Tail::Empty {
            write!(f, "&search_query={}", self.search_query())?;
        }
        if !self.ids.is_empty() {
            write!(f, "&id_list={}", self.ids.join(","))?;
        }
        Ok(())
    }
}
