use crate::domain::UserProfile;
use async_trait::async_trait;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn current_user(&self) -> Result<UserProfile, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
