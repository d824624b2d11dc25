//! Catalog module - Value objects exchanged with the course index.
//!
//! The index itself (storage, embeddings, chunking) lives behind the
//! [`CourseIndex`](crate::ports::CourseIndex) port. This module only holds
//! what crosses that boundary, plus the [`Source`] citations derived from
//! retrieved passages.

mod errors;
mod outline;
mod search;
mod source;

pub use errors::CatalogError;
pub use outline::{CourseOutline, LessonEntry};
pub use search::{PassageMetadata, SearchOutcome, SearchQuery};
pub use source::Source;
