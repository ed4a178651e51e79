//! Seller Profile Entity
//!
//! One-to-one extension of a user record holding bio, story, and profile
//! picture URL. Created empty alongside the user at registration, so a
//! registered seller always has one.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// Seller profile entity
#[derive(Debug, Clone)]
pub struct SellerProfile {
    /// Owning user (also the primary key)
    pub user_id: UserId,
    /// Short bio
    pub bio: Option<String>,
    /// Longer "my story" text
    pub story: Option<String>,
    /// Public URL of the profile picture
    pub profile_pic_url: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl SellerProfile {
    /// Mark the entity as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
