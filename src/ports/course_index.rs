//! Course Index Port - Interface for the pre-built course content index.
//!
//! The index is populated elsewhere; the tools only read from it. How it
//! stores, embeds, or ranks passages is the adapter's business.

use async_trait::async_trait;

use crate::domain::catalog::{CatalogError, CourseOutline, SearchOutcome, SearchQuery};

/// Port for searching course content and resolving course metadata.
#[async_trait]
pub trait CourseIndex: Send + Sync {
    /// Search passages matching the query and optional filters.
    ///
    /// Retrieval problems are reported inside the outcome, not as an `Err`,
    /// so the tool can relay them verbatim.
    async fn search(&self, query: &SearchQuery) -> SearchOutcome;

    /// Resolve a course by (possibly partial) name.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CourseNotFound` if no course matches.
    async fn course_outline(&self, course_name: &str) -> Result<CourseOutline, CatalogError>;

    /// Link for one lesson of a course, if the index knows it.
    async fn lesson_link(&self, course_title: &str, lesson_number: u32) -> Option<String>;

    /// Link for a course, if the index knows it.
    async fn course_link(&self, course_title: &str) -> Option<String>;

    /// Titles of every indexed course.
    async fn course_titles(&self) -> Result<Vec<String>, CatalogError>;
}
