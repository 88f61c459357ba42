mod assessment_repository;
mod course_catalog;
mod repository_error;
mod user_directory;

pub use assessment_repository::AssessmentRepository;
pub use course_catalog::{CatalogError, CourseCatalog};
pub use repository_error::RepositoryError;
pub use user_directory::{DirectoryError, UserDirectory};
