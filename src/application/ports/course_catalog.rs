use crate::domain::Course;
use async_trait::async_trait;

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError>;

    async fn get_course(&self, course_id: &str) -> Result<Option<Course>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
