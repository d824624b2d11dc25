//! Course outline value objects.

use serde::{Deserialize, Serialize};

/// One lesson in a course outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEntry {
    pub number: u32,
    pub title: String,
    pub link: Option<String>,
}

impl LessonEntry {
    pub fn new(number: u32, title: impl Into<String>, link: Option<String>) -> Self {
        Self {
            number,
            title: title.into(),
            link,
        }
    }
}

/// Full structure of a course as held by the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOutline {
    pub title: String,
    pub link: Option<String>,
    pub instructor: Option<String>,
    pub lessons: Vec<LessonEntry>,
}

impl CourseOutline {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            instructor: None,
            lessons: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    pub fn with_lesson(mut self, lesson: LessonEntry) -> Self {
        self.lessons.push(lesson);
        self
    }

    /// Lessons in ascending lesson-number order.
    pub fn sorted_lessons(&self) -> Vec<&LessonEntry> {
        let mut lessons: Vec<&LessonEntry> = self.lessons.iter().collect();
        lessons.sort_by_key(|lesson| lesson.number);
        lessons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_lessons_orders_by_number() {
        let outline = CourseOutline::new("Course")
            .with_lesson(LessonEntry::new(2, "Second", None))
            .with_lesson(LessonEntry::new(0, "Intro", None))
            .with_lesson(LessonEntry::new(1, "First", None));

        let numbers: Vec<u32> = outline.sorted_lessons().iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }
}
