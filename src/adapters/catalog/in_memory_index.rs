//! In-Memory Course Index Adapter
//!
//! Loads a course catalog from YAML and answers searches by query-term
//! overlap. Lesson content is split into passages on blank lines.
//!
//! Catalog format:
//!
//! ```yaml
//! courses:
//!   - title: "MCP: Build Rich-Context AI Apps"
//!     link: https://example.com/mcp
//!     instructor: Elie Schoppik
//!     lessons:
//!       - number: 0
//!         title: Introduction
//!         link: https://example.com/mcp/0
//!         content: |
//!           First passage.
//!
//!           Second passage.
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::domain::catalog::{
    CatalogError, CourseOutline, LessonEntry, PassageMetadata, SearchOutcome, SearchQuery,
};
use crate::ports::CourseIndex;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    courses: Vec<CourseRecord>,
}

#[derive(Debug, Deserialize)]
struct CourseRecord {
    title: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    instructor: Option<String>,
    #[serde(default)]
    lessons: Vec<LessonRecord>,
}

#[derive(Debug, Deserialize)]
struct LessonRecord {
    number: u32,
    title: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Clone)]
struct Passage {
    metadata: PassageMetadata,
    text: String,
    terms: HashSet<String>,
}

/// Course index held entirely in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCourseIndex {
    courses: Vec<CourseOutline>,
    passages: Vec<Passage>,
    max_results: usize,
}

/// Lowercased alphanumeric words of `text`.
fn terms(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Non-empty blank-line separated paragraphs.
fn split_passages(content: &str) -> Vec<String> {
    let mut passages = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                passages.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        passages.push(current.join("\n"));
    }

    passages
}

impl InMemoryCourseIndex {
    /// Create an empty index returning at most `max_results` passages per search
    pub fn new(max_results: usize) -> Self {
        Self {
            courses: Vec::new(),
            passages: Vec::new(),
            max_results,
        }
    }

    /// Load a catalog file
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidCatalog` if the file can't be read or parsed
    pub async fn load<P: AsRef<Path>>(path: P, max_results: usize) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).await.map_err(|e| {
            CatalogError::invalid_catalog(format!("{}: {}", path.display(), e))
        })?;

        let index = Self::from_yaml_str(&yaml, max_results)?;
        tracing::info!(
            path = %path.display(),
            courses = index.courses.len(),
            passages = index.passages.len(),
            "Loaded course catalog"
        );
        Ok(index)
    }

    /// Parse a catalog from YAML text
    pub fn from_yaml_str(yaml: &str, max_results: usize) -> Result<Self, CatalogError> {
        let catalog: CatalogFile = serde_yaml::from_str(yaml)
            .map_err(|e| CatalogError::invalid_catalog(e.to_string()))?;

        let mut index = Self::new(max_results);
        for course in catalog.courses {
            let mut outline = CourseOutline::new(course.title);
            outline.link = course.link;
            outline.instructor = course.instructor;

            let mut contents = Vec::with_capacity(course.lessons.len());
            for lesson in course.lessons {
                outline =
                    outline.with_lesson(LessonEntry::new(lesson.number, lesson.title, lesson.link));
                contents.push((lesson.number, lesson.content));
            }

            index.insert(outline, contents)?;
        }
        Ok(index)
    }

    /// Add a course with per-lesson content
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidCatalog` if a course with the same title exists
    pub fn with_course<S: Into<String>>(
        mut self,
        outline: CourseOutline,
        lesson_content: impl IntoIterator<Item = (u32, S)>,
    ) -> Result<Self, CatalogError> {
        let contents = lesson_content
            .into_iter()
            .map(|(number, text)| (number, text.into()))
            .collect();
        self.insert(outline, contents)?;
        Ok(self)
    }

    /// Number of indexed passages
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    fn insert(
        &mut self,
        outline: CourseOutline,
        contents: Vec<(u32, String)>,
    ) -> Result<(), CatalogError> {
        if self.courses.iter().any(|c| c.title == outline.title) {
            return Err(CatalogError::invalid_catalog(format!(
                "duplicate course title '{}'",
                outline.title
            )));
        }

        for (number, content) in contents {
            for text in split_passages(&content) {
                self.passages.push(Passage {
                    metadata: PassageMetadata::new(outline.title.clone(), Some(number)),
                    terms: terms(&text),
                    text,
                });
            }
        }
        self.courses.push(outline);
        Ok(())
    }

    /// Case-insensitive exact title match, then first substring match
    fn resolve(&self, course_name: &str) -> Option<&CourseOutline> {
        let needle = course_name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.courses
            .iter()
            .find(|course| course.title.to_lowercase() == needle)
            .or_else(|| {
                self.courses
                    .iter()
                    .find(|course| course.title.to_lowercase().contains(&needle))
            })
    }

    fn course(&self, title: &str) -> Option<&CourseOutline> {
        self.courses.iter().find(|course| course.title == title)
    }
}

impl Default for InMemoryCourseIndex {
    fn default() -> Self {
        Self::new(5)
    }
}

#[async_trait]
impl CourseIndex for InMemoryCourseIndex {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        let course_title = match &query.course_name {
            Some(name) => match self.resolve(name) {
                Some(course) => Some(course.title.as_str()),
                None => {
                    let error = CatalogError::CourseNotFound(name.clone());
                    return SearchOutcome::error(error.to_string());
                }
            },
            None => None,
        };

        let query_terms = terms(&query.query);
        if query_terms.is_empty() {
            return SearchOutcome::empty();
        }

        let mut hits: Vec<(&Passage, f32)> = self
            .passages
            .iter()
            .filter(|p| course_title.map_or(true, |title| p.metadata.course_title == title))
            .filter(|p| {
                query
                    .lesson_number
                    .map_or(true, |n| p.metadata.lesson_number == Some(n))
            })
            .filter_map(|p| {
                let shared = query_terms.intersection(&p.terms).count();
                (shared > 0).then(|| (p, 1.0 - shared as f32 / query_terms.len() as f32))
            })
            .collect();

        // Stable sort keeps catalog order among equal distances.
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.truncate(self.max_results);

        SearchOutcome::from_hits(
            hits.into_iter()
                .map(|(p, distance)| (p.text.clone(), p.metadata.clone(), distance)),
        )
    }

    async fn course_outline(&self, course_name: &str) -> Result<CourseOutline, CatalogError> {
        self.resolve(course_name)
            .cloned()
            .ok_or_else(|| CatalogError::CourseNotFound(course_name.to_string()))
    }

    async fn lesson_link(&self, course_title: &str, lesson_number: u32) -> Option<String> {
        self.course(course_title)?
            .lessons
            .iter()
            .find(|lesson| lesson.number == lesson_number)
            .and_then(|lesson| lesson.link.clone())
    }

    async fn course_link(&self, course_title: &str) -> Option<String> {
        self.course(course_title)?.link.clone()
    }

    async fn course_titles(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.courses.iter().map(|c| c.title.clone()).collect())
    }
}
