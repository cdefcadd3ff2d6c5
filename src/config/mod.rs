//! Configuration management.
//!
//! # Configuration File Format
//!
//! ```toml
//! api_url = "http://export.arxiv.org/api/query"
//! sort_by = "date_submitted"
//! sort_order = "ascending"
//! ```
//!
//! Every key can be overridden with an `ARX_QUERY_*` environment variable
//! (e.g. `ARX_QUERY_SORT_ORDER=ascending`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::{QueryOptions, SortBy, SortOrder};
use crate::query::QueryError;

/// Base URL for the arXiv query API
pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// Query defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// API endpoint the serialized query is attached to
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Default sort field
    #[serde(default)]
    pub sort_by: SortBy,

    /// Default sort order
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

fn default_api_url() -> String {
    ARXIV_API_URL.to_string()
}

impl QueryConfig {
    /// Sort options for new queries
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .sort_by(self.sort_by)
            .sort_order(self.sort_order)
    }

    /// Parse configuration from inline TOML
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file readable by [`load_config`]
    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigFileError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigFileError::Serialize(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Load configuration from a file, with `ARX_QUERY_*` environment overrides
pub fn load_config(path: &PathBuf) -> Result<QueryConfig, QueryError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("ARX_QUERY"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Get the default configuration
pub fn get_config() -> QueryConfig {
    QueryConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = get_config();
        assert_eq!(config.api_url, "http://export.arxiv.org/api/query");
        assert_eq!(config.query_options(), QueryOptions::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = QueryConfig::from_toml_str(
            r#"
sort_by = "date_submitted"
sort_order = "ascending"
"#,
        )
        .unwrap();
        assert_eq!(config.sort_by, SortBy::DateSubmitted);
        assert_eq!(config.sort_order, SortOrder::Ascending);
        assert_eq!(config.api_url, ARXIV_API_URL);

        assert!(QueryConfig::from_toml_str(r#"sort_by = "popularity""#).is_err());
    }

    #[test]
    fn test_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arx-query.toml");
        std::fs::write(
            &path,
            "api_url = \"https://export.arxiv.org/api/query\"\nsort_by = \"last_updated\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.api_url, "https://export.arxiv.org/api/query");
        assert_eq!(config.sort_by, SortBy::LastUpdated);
        assert_eq!(config.sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_save_then_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arx-query.toml");

        let config = QueryConfig {
            sort_by: SortBy::LastUpdated,
            ..QueryConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.sort_by, SortBy::LastUpdated);
        assert_eq!(loaded.sort_order, SortOrder::Descending);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_config_missing_file() {
        let path = PathBuf::from("/nonexistent/arx-query.toml");
        assert!(matches!(load_config(&path), Err(QueryError::Config(_))));
    }

    #[test]
    fn test_load_config_unrecognized_sort() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arx-query.toml");
        std::fs::write(&path, "sort_by = \"popularity\"\n").unwrap();

        assert!(matches!(load_config(&path), Err(QueryError::Config(_))));
    }

    #[test]
    fn test_save_unwritable_path() {
        let path = PathBuf::from("/nonexistent/dir/arx-query.toml");
        assert!(matches!(
            QueryConfig::default().save(&path),
            Err(ConfigFileError::Io(_))
        ));
    }
}
