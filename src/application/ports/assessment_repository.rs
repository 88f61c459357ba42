use crate::domain::{Assessment, AssessmentId, AssessmentPage};
use async_trait::async_trait;

use super::RepositoryError;

/// Sole owner of the assessment collection. Implementations keep the
/// collection ordered most-recently-created-first and append-only: jobs are
/// never removed, only transitioned.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Stores a new assessment at the front of the collection.
    async fn create(&self, assessment: &Assessment) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: AssessmentId) -> Result<Option<Assessment>, RepositoryError>;

    /// Returns the 1-indexed `page` of at most `limit` assessments.
    /// Out-of-range pages yield an empty list with correct totals.
    async fn list_page(&self, page: usize, limit: usize)
    -> Result<AssessmentPage, RepositoryError>;

    /// Every batch code issued so far.
    async fn batch_codes(&self) -> Result<Vec<String>, RepositoryError>;

    async fn mark_completed(
        &self,
        id: AssessmentId,
        download_url: &str,
    ) -> Result<(), RepositoryError>;

    async fn mark_failed(
        &self,
        id: AssessmentId,
        error_message: &str,
    ) -> Result<(), RepositoryError>;
}
