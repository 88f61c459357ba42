mod assessment_types;
mod courses;
mod create_assessment;
mod download_assessment;
mod get_assessment;
mod health;
mod list_assessments;
mod user;

pub use assessment_types::AssessmentResponse;
pub use courses::courses_handler;
pub use create_assessment::create_assessment_handler;
pub use download_assessment::download_assessment_handler;
pub use get_assessment::get_assessment_handler;
pub use health::health_handler;
pub use list_assessments::list_assessments_handler;
pub use user::user_handler;
