pub mod dynamodb_service;

pub use dynamodb_service::*;

use async_trait::async_trait;

use crate::{Hemisphere, ProfileResult, UserProfile};

/// Persistence for user profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert the profile, overwriting any existing record with the same user_id.
    async fn put_profile(&self, profile: &UserProfile) -> ProfileResult<()>;

    async fn get_profile(&self, user_id: &str) -> ProfileResult<Option<UserProfile>>;

    /// Fails if no profile exists for `user_id`.
    async fn update_hemisphere(&self, user_id: &str, hemisphere: Hemisphere) -> ProfileResult<()>;
}
