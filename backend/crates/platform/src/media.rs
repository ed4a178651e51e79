//! Media Host Boundary
//!
//! Image storage is an external collaborator: hand it bytes (as a data
//! URI), get back a public URL. Handlers only see the [`MediaHost`] trait;
//! the Cloudinary implementation lives here and is wired up at startup.

use serde::Deserialize;
use thiserror::Error;

/// Media host errors
#[derive(Debug, Error)]
pub enum MediaError {
    /// Upload request failed at the transport level
    #[error("Media upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Host answered with a non-success status
    #[error("Media host rejected upload: {0}")]
    Rejected(String),
}

/// External image store: upload bytes, receive a public URL.
#[trait_variant::make(MediaHost: Send)]
pub trait LocalMediaHost {
    /// Upload a base64 data URI into the given folder and return the
    /// public URL of the stored image.
    async fn upload(&self, data_uri: &str, folder: &str) -> Result<String, MediaError>;
}

/// Cloudinary unsigned-upload client.
///
/// Uses the unsigned upload endpoint with a preset, so no request signing
/// is needed on this side.
#[derive(Debug, Clone)]
pub struct CloudinaryHost {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryHost {
    pub fn new(cloud_name: &str, upload_preset: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                cloud_name
            ),
            upload_preset: upload_preset.into(),
        }
    }
}

impl MediaHost for CloudinaryHost {
    async fn upload(&self, data_uri: &str, folder: &str) -> Result<String, MediaError> {
        let params = [
            ("file", data_uri),
            ("upload_preset", &self.upload_preset),
            ("folder", folder),
        ];

        let response = self
            .client
            .post(&self.upload_url)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Rejected(format!("{status}: {body}")));
        }

        let uploaded: UploadResponse = response.json().await?;
        Ok(uploaded.secure_url)
    }
}
