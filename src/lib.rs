//! # arx-query
//!
//! Builds query strings for the arXiv search API.
//!
//! ## Architecture
//!
//! - [`models`]: Option vocabularies (sort fields, sort orders, search fields, connectives)
//! - [`query`]: The [`Query`] builder, its errors and encoding helpers
//! - [`config`]: Configuration management
//!
//! ```rust
//! use arx_query::{Query, QueryOptions, SortBy, SortOrder};
//!
//! let query = Query::with_ids(
//!     ["1105.5379", "cond-mat/9609089"],
//!     QueryOptions::new()
//!         .sort_by(SortBy::DateSubmitted)
//!         .sort_order(SortOrder::Ascending),
//! );
//!
//! assert_eq!(
//!     query.to_string(),
//!     "sortBy=submittedDate&sortOrder=ascending&id_list=1105.5379,cond-mat/9609089"
//! );
//! ```

pub mod config;
pub mod models;
pub mod query;

// Re-export commonly used types
pub use models::{Connective, Field, FieldOptions, QueryOptions, SortBy, SortOrder};
pub use query::{Query, QueryError, Tail};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
