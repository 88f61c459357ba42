use std::sync::Arc;

use crate::application::ports::{AssessmentRepository, CourseCatalog, UserDirectory};
use crate::application::services::AssessmentService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub assessment_service: Arc<AssessmentService>,
    pub repository: Arc<dyn AssessmentRepository>,
    pub catalog: Arc<dyn CourseCatalog>,
    pub user_directory: Arc<dyn UserDirectory>,
    pub settings: Settings,
}
