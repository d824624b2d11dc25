//! Source citation value object.

use serde::{Deserialize, Serialize};

use super::PassageMetadata;

/// Human-readable citation for one retrieved passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// `"<course title> - Lesson <n>"` or `"<course title>"`.
    pub text: String,
    /// Link to the lesson or course, when the index knows one.
    pub url: Option<String>,
}

impl Source {
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// Builds the citation for a passage.
    pub fn for_passage(metadata: &PassageMetadata, url: Option<String>) -> Self {
        Self::new(metadata.label(), url)
    }
}
