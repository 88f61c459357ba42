use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{AssessmentRepository, RepositoryError};
use crate::domain::{Assessment, AssessmentId, AssessmentPage};

/// Process-local assessment store. The collection lives behind the repository
/// for its whole lifetime: constructed at startup, cleared explicitly by
/// tests, never reachable as a module-level variable.
pub struct InMemoryAssessmentRepository {
    assessments: RwLock<Vec<Assessment>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self {
            assessments: RwLock::new(Vec::new()),
        }
    }

    /// Empties the store. Test setups use this to start from a known state.
    pub async fn clear(&self) {
        self.assessments.write().await.clear();
    }
}

impl Default for InMemoryAssessmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    #[tracing::instrument(skip(self, assessment), fields(assessment_id = %assessment.id.as_uuid()))]
    async fn create(&self, assessment: &Assessment) -> Result<(), RepositoryError> {
        let mut assessments = self.assessments.write().await;

        if assessments.iter().any(|a| a.id == assessment.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate assessment id: {}",
                assessment.id.as_uuid()
            )));
        }

        // newest first
        assessments.insert(0, assessment.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: AssessmentId) -> Result<Option<Assessment>, RepositoryError> {
        let assessments = self.assessments.read().await;
        Ok(assessments.iter().find(|a| a.id == id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn list_page(
        &self,
        page: usize,
        limit: usize,
    ) -> Result<AssessmentPage, RepositoryError> {
        let assessments = self.assessments.read().await;
        let total = assessments.len();
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };

        let start = page.saturating_sub(1).saturating_mul(limit);
        let items = if start >= total {
            Vec::new()
        } else {
            assessments[start..(start + limit).min(total)].to_vec()
        };

        Ok(AssessmentPage {
            assessments: items,
            current_page: page,
            total_pages,
            total_assessments: total,
        })
    }

    async fn batch_codes(&self) -> Result<Vec<String>, RepositoryError> {
        let assessments = self.assessments.read().await;
        Ok(assessments.iter().map(|a| a.batch_code.clone()).collect())
    }

    #[tracing::instrument(skip(self, download_url), fields(assessment_id = %id.as_uuid()))]
    async fn mark_completed(
        &self,
        id: AssessmentId,
        download_url: &str,
    ) -> Result<(), RepositoryError> {
        let mut assessments = self.assessments.write().await;
        let assessment = assessments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("assessment: {}", id.as_uuid())))?;

        assessment.complete(download_url.to_string());
        Ok(())
    }

    #[tracing::instrument(skip(self, error_message), fields(assessment_id = %id.as_uuid()))]
    async fn mark_failed(
        &self,
        id: AssessmentId,
        error_message: &str,
    ) -> Result<(), RepositoryError> {
        let mut assessments = self.assessments.write().await;
        let assessment = assessments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("assessment: {}", id.as_uuid())))?;

        assessment.fail(error_message.to_string());
        Ok(())
    }
}
