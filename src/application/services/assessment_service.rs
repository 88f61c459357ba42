use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use tokio::sync::mpsc;

use crate::application::ports::{
    AssessmentRepository, CatalogError, CourseCatalog, RepositoryError,
};
use crate::domain::{Assessment, AssessmentDraft, DraftError, generate_batch_code};

use super::GenerationMessage;

/// Creation use case: validates the draft, resolves the course, issues a
/// batch code, persists the job and hands it to the generation queue.
pub struct AssessmentService {
    repository: Arc<dyn AssessmentRepository>,
    catalog: Arc<dyn CourseCatalog>,
    generation_sender: mpsc::Sender<GenerationMessage>,
    sequence: AtomicU64,
}

impl AssessmentService {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        catalog: Arc<dyn CourseCatalog>,
        generation_sender: mpsc::Sender<GenerationMessage>,
    ) -> Self {
        Self {
            repository,
            catalog,
            generation_sender,
            sequence: AtomicU64::new(0),
        }
    }

    #[tracing::instrument(skip(self, draft), fields(batch_name = %draft.batch_name))]
    pub async fn submit(&self, draft: &AssessmentDraft) -> Result<Assessment, SubmissionError> {
        draft.validate()?;

        let course = self
            .catalog
            .get_course(&draft.course_id)
            .await?
            .ok_or_else(|| SubmissionError::UnknownCourse(draft.course_id.clone()))?;

        let mut module_names = Vec::with_capacity(draft.selected_modules.len());
        for module_id in &draft.selected_modules {
            let module = course
                .module(module_id)
                .ok_or_else(|| SubmissionError::UnknownModule(module_id.clone()))?;
            module_names.push(module.name.clone());
        }

        let question_format = draft
            .question_format
            .ok_or(DraftError::MissingFields(vec!["questionFormat"]))?;
        let output_format = draft
            .output_format
            .ok_or(DraftError::MissingFields(vec!["outputFormat"]))?;

        let existing: HashSet<String> =
            self.repository.batch_codes().await?.into_iter().collect();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let batch_code = generate_batch_code(&draft.batch_name, sequence, &existing);

        let initial_progress = rand::thread_rng().gen_range(10..40);

        let assessment = Assessment::new(
            draft.name.clone(),
            draft.batch_name.clone(),
            batch_code,
            question_format,
            draft.difficulty_level,
            output_format,
            course.name.clone(),
            module_names,
            draft.consolidated_output,
            initial_progress,
        );

        self.repository.create(&assessment).await?;

        self.generation_sender
            .send(GenerationMessage {
                assessment_id: assessment.id,
            })
            .await
            .map_err(|_| SubmissionError::QueueUnavailable)?;

        tracing::info!(
            assessment_id = %assessment.id.as_uuid(),
            batch_code = %assessment.batch_code,
            "Assessment job created"
        );

        Ok(assessment)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("invalid draft: {0}")]
    Invalid(#[from] DraftError),
    #[error("unknown course: {0}")]
    UnknownCourse(String),
    #[error("unknown module: {0}")]
    UnknownModule(String),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("generation queue unavailable")]
    QueueUnavailable,
}
