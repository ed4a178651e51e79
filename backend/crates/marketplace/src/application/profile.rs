//! Seller Profile Use Case
//!
//! Reads and edits the caller's own seller profile. The profile row is
//! created empty at registration, so a missing row means the id does not
//! belong to any registered seller.

use std::sync::Arc;

use kernel::id::UserId;
use platform::media::MediaHost;

use crate::domain::entity::SellerProfile;
use crate::domain::repository::SellerProfileRepository;
use crate::error::{MarketplaceError, MarketplaceResult};

/// Cloudinary folder for profile pictures
const PROFILE_IMAGE_FOLDER: &str = "profile-pics";

/// Update input; every field optional, absent means unchanged.
pub struct UpdateProfileInput {
    pub bio: Option<String>,
    pub story: Option<String>,
    pub profile_pic_data_uri: Option<String>,
}

/// Seller profile use case
pub struct ProfileUseCase<S, M>
where
    S: SellerProfileRepository,
    M: MediaHost,
{
    profiles: Arc<S>,
    media: Arc<M>,
}

impl<S, M> ProfileUseCase<S, M>
where
    S: SellerProfileRepository + Sync,
    M: MediaHost + Sync,
{
    pub fn new(profiles: Arc<S>, media: Arc<M>) -> Self {
        Self { profiles, media }
    }

    /// The caller's profile, or `None` when the row is missing
    pub async fn get(&self, user_id: UserId) -> MarketplaceResult<Option<SellerProfile>> {
        self.profiles.find_by_user(&user_id).await
    }

    pub async fn update(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> MarketplaceResult<SellerProfile> {
        let mut profile = self
            .profiles
            .find_by_user(&user_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("Profile"))?;

        if let Some(bio) = input.bio {
            let bio = bio.trim().to_string();
            profile.bio = if bio.is_empty() { None } else { Some(bio) };
        }

        if let Some(story) = input.story {
            let story = story.trim().to_string();
            profile.story = if story.is_empty() { None } else { Some(story) };
        }

        if let Some(data_uri) = &input.profile_pic_data_uri {
            profile.profile_pic_url =
                Some(self.media.upload(data_uri, PROFILE_IMAGE_FOLDER).await?);
        }

        profile.touch();
        self.profiles.update(&profile).await?;

        tracing::info!(user_id = %user_id, "Seller profile updated");

        Ok(profile)
    }
}
