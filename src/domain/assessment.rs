use chrono::{DateTime, Utc};

use super::{AssessmentId, AssessmentStatus, OutputFormat, QuestionFormat};

/// A single assessment-generation job and the parameters it was requested
/// with. Progress 100 is reserved for completed jobs; a download location
/// exists only once the job has completed.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub id: AssessmentId,
    pub assessment_name: String,
    pub batch_name: String,
    pub batch_code: String,
    pub question_format: QuestionFormat,
    pub difficulty_level: u8,
    pub output_format: OutputFormat,
    pub course_name: String,
    pub selected_modules: Vec<String>,
    pub consolidated_output: bool,
    pub status: AssessmentStatus,
    pub progress: u8,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub download_url: Option<String>,
}

impl Assessment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        assessment_name: String,
        batch_name: String,
        batch_code: String,
        question_format: QuestionFormat,
        difficulty_level: u8,
        output_format: OutputFormat,
        course_name: String,
        selected_modules: Vec<String>,
        consolidated_output: bool,
        initial_progress: u8,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            assessment_name,
            batch_name,
            batch_code,
            question_format,
            difficulty_level,
            output_format,
            course_name,
            selected_modules,
            consolidated_output,
            status: AssessmentStatus::Processing,
            // 100 is reserved for completed jobs
            progress: initial_progress.min(99),
            error_message: None,
            created_at: Utc::now(),
            completed_at: None,
            download_url: None,
        }
    }

    pub fn complete(&mut self, download_url: String) {
        self.status = AssessmentStatus::Completed;
        self.progress = 100;
        self.completed_at = Some(Utc::now());
        self.download_url = Some(download_url);
        self.error_message = None;
    }

    pub fn fail(&mut self, error_message: String) {
        self.status = AssessmentStatus::Failed;
        self.completed_at = None;
        self.download_url = None;
        self.error_message = Some(error_message);
    }

    /// Download location, present only for completed assessments.
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// File extension of the artifact this job produces.
    pub fn artifact_extension(&self) -> &'static str {
        if self.consolidated_output {
            "zip"
        } else {
            self.output_format.extension()
        }
    }
}
