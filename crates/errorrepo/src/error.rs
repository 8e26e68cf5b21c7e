//! Error types for catalog registration and registry setup

use thiserror::Error;

/// Errors that can occur while registering or loading message catalogs
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A catalog line has no `=` separating the id from its template
    #[error("Message structure parse error in locale '{locale}' at line {line}")]
    Parse { locale: String, line: usize },

    /// A catalog resource name carries no locale extension
    #[error("Catalog resource name has no locale extension: {name}")]
    InvalidResourceName { name: String },

    /// A catalog resource is not valid UTF-8
    #[error("Catalog resource is not valid UTF-8: {name}")]
    InvalidEncoding { name: String },

    /// A listed built-in resource could not be read
    #[error("Built-in catalog resource missing: {name}")]
    MissingResource { name: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Invalid registry configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
