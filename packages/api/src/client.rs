//! The dashboard API client.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, Result};
use dashboard_core::{ProfileBatch, UserRecord};

/// Body for `POST /delete-admin`.
#[derive(Serialize)]
struct DeleteAdminRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a str,
}

/// Body for `POST /edit-admin`.
#[derive(Serialize)]
struct EditAdminRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a str,
    name: &'a str,
}

/// Client for the admin dashboard backend.
///
/// Holds one `reqwest::Client` and the backend base URL; cheap to clone, so
/// a single instance constructed at startup can be handed to every UI
/// handler. No timeouts are configured: a hung request stays in flight for
/// the life of the page, and callers never cancel.
#[derive(Clone)]
pub struct AdminApi {
    http: Client,
    base_url: String,
}

impl AdminApi {
    /// Create a client for the backend at `base_url`.
    ///
    /// The URL must be absolute (`http://` or `https://`); a trailing slash
    /// is trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ApiError::InvalidBaseUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// Get the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full user/admin list.
    ///
    /// Returns the records in server order; the caller renders one row per
    /// record in that order.
    pub async fn list_profiles(&self) -> Result<Vec<UserRecord>> {
        let url = format!("{}/profiles", self.base_url);
        debug!(url = %url, "Fetching profiles");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let batch: ProfileBatch = response.json().await.map_err(|e| {
                ApiError::Parse(format!("Failed to parse profile list: {}", e))
            })?;

            debug!(count = batch.result.len(), "Fetched profiles");
            Ok(batch.into_records())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Delete the record with the given id.
    ///
    /// The server response body is unspecified and ignored; only the status
    /// is checked.
    pub async fn delete_admin(&self, id: &str) -> Result<()> {
        let url = format!("{}/delete-admin", self.base_url);
        debug!(url = %url, id = %id, "Deleting admin");

        let response = self
            .http
            .post(&url)
            .json(&DeleteAdminRequest { id })
            .send()
            .await?;

        self.check_status(response).await
    }

    /// Rename the record with the given id.
    pub async fn edit_admin(&self, id: &str, name: &str) -> Result<()> {
        let url = format!("{}/edit-admin", self.base_url);
        debug!(url = %url, id = %id, "Editing admin name");

        let response = self
            .http
            .post(&url)
            .json(&EditAdminRequest { id, name })
            .send()
            .await?;

        self.check_status(response).await
    }

    async fn check_status(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(AdminApi::new("https://example.com").is_ok());
        assert!(AdminApi::new("http://localhost:8080").is_ok());
    }

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(
            AdminApi::new(""),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            AdminApi::new("example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            AdminApi::new("ftp://example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn trims_trailing_slash() {
        let api = AdminApi::new("http://localhost:8080/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:8080");
    }

    #[test]
    fn request_bodies_use_wire_field_names() {
        let body = serde_json::to_string(&EditAdminRequest {
            id: "u1",
            name: "Alice",
        })
        .unwrap();
        assert_eq!(body, r#"{"_id":"u1","name":"Alice"}"#);

        let body = serde_json::to_string(&DeleteAdminRequest { id: "u2" }).unwrap();
        assert_eq!(body, r#"{"_id":"u2"}"#);
    }
}
