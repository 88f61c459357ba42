use std::sync::Arc;

use crate::application::ports::{AssessmentRepository, UserDirectory};
use crate::domain::{Assessment, AssessmentPage, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Form,
    Results,
}

/// Headless application shell: tracks the active screen and the loaded page
/// of assessments. Transitions happen only on caller navigation; fetch
/// failures degrade to empty state instead of blocking.
pub struct ViewController {
    user_directory: Arc<dyn UserDirectory>,
    repository: Arc<dyn AssessmentRepository>,
    page_size: usize,
    view: View,
    user: Option<UserProfile>,
    page: Option<AssessmentPage>,
}

impl ViewController {
    pub fn new(
        user_directory: Arc<dyn UserDirectory>,
        repository: Arc<dyn AssessmentRepository>,
        page_size: usize,
    ) -> Self {
        Self {
            user_directory,
            repository,
            page_size,
            view: View::Landing,
            user: None,
            page: None,
        }
    }

    /// Loads the user profile and the first page of assessments concurrently.
    pub async fn initial_load(&mut self) {
        let (user, page) = tokio::join!(
            self.user_directory.current_user(),
            self.repository.list_page(1, self.page_size),
        );

        match user {
            Ok(profile) => self.user = Some(profile),
            Err(e) => tracing::error!(error = %e, "Failed to fetch user profile"),
        }
        match page {
            Ok(p) => self.page = Some(p),
            Err(e) => tracing::error!(error = %e, "Failed to fetch assessments"),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn page(&self) -> Option<&AssessmentPage> {
        self.page.as_ref()
    }

    /// Assessments shown on the landing screen: the most recent page.
    pub fn recent_assessments(&self) -> &[Assessment] {
        self.page.as_ref().map(|p| p.assessments.as_slice()).unwrap_or(&[])
    }

    pub fn open_landing(&mut self) {
        self.view = View::Landing;
    }

    pub fn open_form(&mut self) {
        self.view = View::Form;
    }

    pub fn open_results(&mut self) {
        self.view = View::Results;
    }

    /// After a successful creation: reload the first page and show results.
    pub async fn assessment_created(&mut self) {
        self.refresh(1).await;
        self.view = View::Results;
    }

    pub async fn next_page(&mut self) {
        if let Some(target) = self.page.as_ref().and_then(AssessmentPage::next_page) {
            self.refresh(target).await;
        }
    }

    pub async fn prev_page(&mut self) {
        if let Some(target) = self.page.as_ref().and_then(AssessmentPage::prev_page) {
            self.refresh(target).await;
        }
    }

    async fn refresh(&mut self, page: usize) {
        match self.repository.list_page(page, self.page_size).await {
            Ok(p) => self.page = Some(p),
            Err(e) => tracing::error!(error = %e, page = page, "Failed to fetch assessments"),
        }
    }

    /// Download location of a completed assessment; anything else reports
    /// unavailability instead of producing a location.
    pub fn download(assessment: &Assessment) -> Result<&str, DownloadError> {
        assessment.download_url().ok_or(DownloadError::Unavailable)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("download not available")]
    Unavailable,
}
