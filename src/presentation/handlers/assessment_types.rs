use serde::Serialize;

use crate::domain::Assessment;

/// Wire shape of an assessment record. Field names follow the client's
/// camelCase convention.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: String,
    pub assessment_name: String,
    pub batch_name: String,
    pub batch_code: String,
    pub question_format: String,
    pub difficulty_level: u8,
    pub output_format: String,
    pub course_name: String,
    pub selected_modules: Vec<String>,
    pub consolidated_output: bool,
    pub status: String,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id.as_uuid().to_string(),
            assessment_name: assessment.assessment_name.clone(),
            batch_name: assessment.batch_name.clone(),
            batch_code: assessment.batch_code.clone(),
            question_format: assessment.question_format.as_str().to_string(),
            difficulty_level: assessment.difficulty_level,
            output_format: assessment.output_format.as_str().to_string(),
            course_name: assessment.course_name.clone(),
            selected_modules: assessment.selected_modules.clone(),
            consolidated_output: assessment.consolidated_output,
            status: assessment.status.as_str().to_string(),
            progress: assessment.progress,
            error_message: assessment.error_message.clone(),
            created_at: assessment.created_at.to_rfc3339(),
            completed_at: assessment.completed_at.map(|t| t.to_rfc3339()),
            download_url: assessment.download_url.clone(),
        }
    }
}
