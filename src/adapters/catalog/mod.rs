//! Course Index Adapters
//!
//! Implementations of the CourseIndex port.
//!
//! ## Available Adapters
//!
//! - **InMemoryCourseIndex** - Catalog loaded from a YAML file, ranked by term overlap
//!
//! ## Usage
//!
//! ```ignore
//! use course_rag::adapters::catalog::InMemoryCourseIndex;
//!
//! let index = InMemoryCourseIndex::load("./data/catalog.yaml", 5).await?;
//! ```

mod in_memory_index;

pub use in_memory_index::InMemoryCourseIndex;
