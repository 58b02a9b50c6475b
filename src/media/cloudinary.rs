//! Cloudinary REST client
//!
//! Implements [`MediaStore`](super::MediaStore) against the Cloudinary
//! upload API. Requests are signed with SHA-256 over the sorted parameter
//! string plus the API secret; file bodies are sent as base64 data URIs.

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::media::{FilePayload, MediaRef, MediaStore};
use crate::types::{Result, VitrineError};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary credentials and HTTP client
#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

/// Successful upload response (fields we consume)
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// Destroy response: `result` is "ok" or "not found"
#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryClient {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            cloud_name,
            api_key,
            api_secret,
        }
    }

    /// Sign a parameter set: SHA-256 hex over "k1=v1&k2=v2...<secret>"
    /// with keys sorted alphabetically (api_key excluded from signing).
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        let joined = sorted
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn timestamp() -> String {
        chrono::Utc::now().timestamp().to_string()
    }

    async fn upload_resource(
        &self,
        file: &FilePayload,
        folder: &str,
        resource_type: &str,
    ) -> Result<MediaRef> {
        let data_uri = format!(
            "data:application/octet-stream;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&file.data)
        );
        let timestamp = Self::timestamp();

        let signed_params = [
            ("folder", folder),
            ("signature_algorithm", "sha256"),
            ("timestamp", timestamp.as_str()),
            ("unique_filename", "true"),
            ("use_filename", "true"),
        ];
        let signature = self.sign(&signed_params);

        let url = format!("{API_BASE}/{}/{resource_type}/upload", self.cloud_name);
        debug!(folder, resource_type, filename = %file.filename, "Uploading to media store");

        let form = [
            ("file", data_uri.as_str()),
            ("api_key", self.api_key.as_str()),
            ("folder", folder),
            ("signature_algorithm", "sha256"),
            ("timestamp", timestamp.as_str()),
            ("unique_filename", "true"),
            ("use_filename", "true"),
            ("signature", signature.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| VitrineError::Asset(format!("upload request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VitrineError::Asset(format!(
                "upload rejected ({status}): {body}"
            )));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| VitrineError::Asset(format!("unreadable upload response: {e}")))?;

        Ok(MediaRef::new(parsed.secure_url, parsed.public_id))
    }

    async fn destroy_resource(&self, file_id: &str, resource_type: &str) -> Result<DestroyResponse> {
        let timestamp = Self::timestamp();

        let signed_params = [
            ("public_id", file_id),
            ("signature_algorithm", "sha256"),
            ("timestamp", timestamp.as_str()),
        ];
        let signature = self.sign(&signed_params);

        let url = format!("{API_BASE}/{}/{resource_type}/destroy", self.cloud_name);

        let form = [
            ("public_id", file_id),
            ("api_key", self.api_key.as_str()),
            ("signature_algorithm", "sha256"),
            ("timestamp", timestamp.as_str()),
            ("signature", signature.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| VitrineError::Asset(format!("delete request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VitrineError::Asset(format!(
                "delete rejected ({status}): {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| VitrineError::Asset(format!("unreadable delete response: {e}")))
    }
}

#[async_trait]
impl MediaStore for CloudinaryClient {
    async fn upload(&self, file: &FilePayload, folder: &str) -> Result<MediaRef> {
        self.upload_resource(file, folder, "image").await
    }

    async fn upload_video(&self, file: &FilePayload, folder: &str) -> Result<MediaRef> {
        self.upload_resource(file, folder, "video").await
    }

    async fn delete(&self, file_id: &str) -> Result<()> {
        // The handle alone does not say whether it names an image or a
        // video, and destroy is per-resource-type. Try image first, then
        // video for handles the image endpoint does not know.
        let result = self.destroy_resource(file_id, "image").await?;
        if result.result == "ok" {
            return Ok(());
        }

        let result = self.destroy_resource(file_id, "video").await?;
        if result.result == "ok" {
            return Ok(());
        }

        Err(VitrineError::Asset(format!(
            "delete of '{file_id}' returned '{}'",
            result.result
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_sorted_and_deterministic() {
        let client = CloudinaryClient::new("demo".into(), "key".into(), "secret".into());

        let a = client.sign(&[("timestamp", "100"), ("folder", "f")]);
        let b = client.sign(&[("folder", "f"), ("timestamp", "100")]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // SHA-256 hex

        // Different secret changes the signature
        let other = CloudinaryClient::new("demo".into(), "key".into(), "other".into());
        assert_ne!(a, other.sign(&[("timestamp", "100"), ("folder", "f")]));
    }
}
