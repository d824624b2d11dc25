//! GetCourseAnalyticsHandler - Catalog summary

use serde::Serialize;
use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::ports::CourseIndex;

/// Count and titles of the indexed courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseAnalytics {
    pub total_courses: usize,
    pub course_titles: Vec<String>,
}

/// Handler for catalog analytics
pub struct GetCourseAnalyticsHandler {
    index: Arc<dyn CourseIndex>,
}

impl GetCourseAnalyticsHandler {
    pub fn new(index: Arc<dyn CourseIndex>) -> Self {
        Self { index }
    }

    pub async fn handle(&self) -> Result<CourseAnalytics, CatalogError> {
        let course_titles = self.index.course_titles().await?;
        Ok(CourseAnalytics {
            total_courses: course_titles.len(),
            course_titles,
        })
    }
}
