//! Option vocabularies accepted by the arXiv query API.

mod field;
mod search;

pub use field::{Connective, Field, FieldOptions};
pub use search::{QueryOptions, SortBy, SortOrder};
