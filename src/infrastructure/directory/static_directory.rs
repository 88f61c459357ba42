use async_trait::async_trait;

use crate::application::ports::{DirectoryError, UserDirectory};
use crate::domain::UserProfile;

/// Fixed user profile, standing in for a real identity provider.
pub struct StaticUserDirectory {
    profile: UserProfile,
}

impl StaticUserDirectory {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

impl Default for StaticUserDirectory {
    fn default() -> Self {
        Self::new(UserProfile::new(
            "Dr. Sarah Johnson",
            "sarah.johnson@example.com",
        ))
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn current_user(&self) -> Result<UserProfile, DirectoryError> {
        Ok(self.profile.clone())
    }
}
