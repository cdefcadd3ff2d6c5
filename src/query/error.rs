use thiserror::Error;

/// Errors that can occur while building a query
#[derive(Debug, Error)]
pub enum QueryError {
    /// An option was supplied as a value of the wrong kind
    #[error("Invalid type for option `{option}`: expected {expected}, found {found}")]
    InvalidOptionType {
        option: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A correctly typed option value outside the recognized set
    #[error("Unrecognized value for option `{option}`: {value}")]
    UnrecognizedOption { option: String, value: String },

    /// Caller contract violation (e.g. a field operation without values)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// API base URL could not be parsed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
