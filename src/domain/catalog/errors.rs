//! Catalog error types

use thiserror::Error;

/// Errors raised by course index lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No course title resolved from the given name.
    #[error("No course found matching '{0}'")]
    CourseNotFound(String),

    /// The index could not be queried.
    #[error("Course index unavailable: {0}")]
    Unavailable(String),

    /// Catalog data could not be read or parsed.
    #[error("Invalid course catalog: {0}")]
    InvalidCatalog(String),
}

impl CatalogError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates an invalid catalog error.
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog(message.into())
    }
}
