#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage failed: {0}")]
    StorageFailed(String),
}
