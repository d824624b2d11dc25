//! Search request and outcome value objects.

use serde::{Deserialize, Serialize};

/// Parameters for a passage search, passed through to the index unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query.
    pub query: String,
    /// Optional course name filter (resolution is up to the index).
    pub course_name: Option<String>,
    /// Optional lesson number filter.
    pub lesson_number: Option<u32>,
}

impl SearchQuery {
    /// Creates an unfiltered query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            course_name: None,
            lesson_number: None,
        }
    }

    /// Restricts the search to a course.
    pub fn with_course(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = Some(course_name.into());
        self
    }

    /// Restricts the search to a lesson number.
    pub fn with_lesson(mut self, lesson_number: u32) -> Self {
        self.lesson_number = Some(lesson_number);
        self
    }
}

/// Where a retrieved passage came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageMetadata {
    pub course_title: String,
    pub lesson_number: Option<u32>,
}

impl PassageMetadata {
    pub fn new(course_title: impl Into<String>, lesson_number: Option<u32>) -> Self {
        Self {
            course_title: course_title.into(),
            lesson_number,
        }
    }

    /// Human-readable label: `"<title> - Lesson <n>"` or just `"<title>"`.
    pub fn label(&self) -> String {
        match self.lesson_number {
            Some(n) => format!("{} - Lesson {}", self.course_title, n),
            None => self.course_title.clone(),
        }
    }
}

/// Result of an index search.
///
/// `documents`, `metadata` and `distances` are parallel sequences. When
/// `error` is set all three are empty and the error text is the whole result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    documents: Vec<String>,
    metadata: Vec<PassageMetadata>,
    distances: Vec<f32>,
    error: Option<String>,
}

impl SearchOutcome {
    /// Creates an outcome with no matches.
    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
            metadata: Vec::new(),
            distances: Vec::new(),
            error: None,
        }
    }

    /// Creates an outcome carrying only an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::empty()
        }
    }

    /// Builds an outcome from ranked `(passage, metadata, distance)` hits.
    pub fn from_hits(hits: impl IntoIterator<Item = (String, PassageMetadata, f32)>) -> Self {
        let mut outcome = Self::empty();
        for (document, metadata, distance) in hits {
            outcome.documents.push(document);
            outcome.metadata.push(metadata);
            outcome.distances.push(distance);
        }
        outcome
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn metadata(&self) -> &[PassageMetadata] {
        &self.metadata
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Returns the index error, if the search failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when the search succeeded but matched nothing.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates over `(passage, metadata)` pairs in ranked order.
    pub fn passages(&self) -> impl Iterator<Item = (&str, &PassageMetadata)> {
        self.documents
            .iter()
            .map(String::as_str)
            .zip(self.metadata.iter())
    }
}
