use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, mpsc};

use formative::application::ports::{AssessmentRepository, CourseCatalog, RepositoryError};
use formative::application::services::{
    AssessmentService, FormSession, GenerationMessage, SessionError,
};
use formative::domain::{
    Assessment, AssessmentDraft, AssessmentId, AssessmentPage, OutputFormat, QuestionFormat,
    QuestionTone,
};
use formative::infrastructure::catalog::StaticCourseCatalog;
use formative::infrastructure::persistence::InMemoryAssessmentRepository;

fn fill_valid(draft: &mut AssessmentDraft) {
    draft.name = "Midterm".to_string();
    draft.batch_name = "Midterm Batch".to_string();
    draft.test_case = "standard".to_string();
    draft.question_format = Some(QuestionFormat::MultipleChoice);
    draft.question_tone = Some(QuestionTone::Direct);
    draft.output_format = Some(OutputFormat::Gift);
    draft.course_id = "cs101".to_string();
    draft.selected_modules = vec!["cs101-m1".to_string()];
}

fn create_session() -> (Arc<FormSession>, mpsc::Receiver<GenerationMessage>) {
    let repository = Arc::new(InMemoryAssessmentRepository::new());
    let catalog: Arc<dyn CourseCatalog> = Arc::new(StaticCourseCatalog::new());
    let (sender, receiver) = mpsc::channel(8);

    let service = Arc::new(AssessmentService::new(
        repository as Arc<dyn AssessmentRepository>,
        catalog,
        sender,
    ));

    (Arc::new(FormSession::new(service)), receiver)
}

/// Repository whose `create` blocks until released, to hold a submission in
/// flight for as long as a test needs.
struct GatedRepository {
    inner: InMemoryAssessmentRepository,
    gate: Notify,
}

#[async_trait::async_trait]
impl AssessmentRepository for GatedRepository {
    async fn create(&self, assessment: &Assessment) -> Result<(), RepositoryError> {
        self.gate.notified().await;
        self.inner.create(assessment).await
    }

    async fn get_by_id(&self, id: AssessmentId) -> Result<Option<Assessment>, RepositoryError> {
        self.inner.get_by_id(id).await
    }

    async fn list_page(
        &self,
        page: usize,
        limit: usize,
    ) -> Result<AssessmentPage, RepositoryError> {
        self.inner.list_page(page, limit).await
    }

    async fn batch_codes(&self) -> Result<Vec<String>, RepositoryError> {
        self.inner.batch_codes().await
    }

    async fn mark_completed(
        &self,
        id: AssessmentId,
        download_url: &str,
    ) -> Result<(), RepositoryError> {
        self.inner.mark_completed(id, download_url).await
    }

    async fn mark_failed(
        &self,
        id: AssessmentId,
        error_message: &str,
    ) -> Result<(), RepositoryError> {
        self.inner.mark_failed(id, error_message).await
    }
}

#[tokio::test]
async fn given_field_edits_when_reading_draft_then_reflects_changes() {
    let (session, _receiver) = create_session();

    session
        .update(|draft| {
            draft.name = "Quiz".to_string();
            draft.difficulty_level = 8;
        })
        .await;

    let draft = session.draft().await;
    assert_eq!(draft.name, "Quiz");
    assert_eq!(draft.difficulty_level, 8);
}

#[tokio::test]
async fn given_selected_modules_when_course_changes_then_selection_clears() {
    let (session, _receiver) = create_session();

    session
        .update(|draft| {
            draft.select_course("cs101");
            draft.add_module("cs101-m1");
        })
        .await;
    session.update(|draft| draft.select_course("math201")).await;

    let draft = session.draft().await;
    assert_eq!(draft.course_id, "math201");
    assert!(draft.selected_modules.is_empty());
}

#[tokio::test]
async fn given_valid_draft_when_submitting_then_draft_resets() {
    let (session, _receiver) = create_session();
    session.update(fill_valid).await;

    let result = session.submit().await;

    assert!(result.is_ok());
    assert_eq!(session.draft().await, AssessmentDraft::default());
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn given_invalid_draft_when_submitting_then_draft_is_preserved() {
    let (session, _receiver) = create_session();
    session
        .update(|draft| draft.name = "Only a name".to_string())
        .await;

    let result = session.submit().await;

    assert!(matches!(result, Err(SessionError::Submission(_))));
    assert_eq!(session.draft().await.name, "Only a name");
}

#[tokio::test]
async fn given_submission_in_flight_when_submitting_again_then_rejects() {
    let repository = Arc::new(GatedRepository {
        inner: InMemoryAssessmentRepository::new(),
        gate: Notify::new(),
    });
    let catalog: Arc<dyn CourseCatalog> = Arc::new(StaticCourseCatalog::new());
    let (sender, _receiver) = mpsc::channel(8);

    let service = Arc::new(AssessmentService::new(
        Arc::clone(&repository) as Arc<dyn AssessmentRepository>,
        catalog,
        sender,
    ));
    let session = Arc::new(FormSession::new(service));
    session.update(fill_valid).await;

    let first = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.submit().await }
    });

    // wait for the first submission to reach the gated repository
    while !session.is_submitting() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let second = session.submit().await;
    assert!(matches!(second, Err(SessionError::SubmissionInFlight)));

    repository.gate.notify_one();
    let first = first.await.unwrap();
    assert!(first.is_ok());
    assert!(!session.is_submitting());
}
