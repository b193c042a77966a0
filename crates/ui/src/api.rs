//! HTTP client for the Rolodex API service.
//!
//! Thin reqwest wrapper that maps HTTP failures into the client-side error
//! taxonomy: 404 becomes `NotFound`, other non-success statuses become
//! `Server` with the message pulled out of the JSON error body, and
//! transport failures stay `Transport`.

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use rolodex_core::{NewUser, UserId, UserPatch, UserRecord};

/// Errors that can occur when talking to the API service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Targeted record does not exist.
    #[error("record not found")]
    NotFound,

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Server { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Client for the user directory REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    /// Fetch all records.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request or decoding fails.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let response = self.client.get(self.users_url()).send().await?;
        decode(check(response).await?).await
    }

    /// Create a record; the server assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request or decoding fails.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, ApiError> {
        let response = self
            .client
            .post(self.users_url())
            .json(new_user)
            .send()
            .await?;
        decode(check(response).await?).await
    }

    /// Update a record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no record has that id; other
    /// `ApiError` variants for request or decoding failures.
    pub async fn update_user(&self, id: UserId, patch: &UserPatch) -> Result<UserRecord, ApiError> {
        let response = self
            .client
            .put(self.user_url(id))
            .json(patch)
            .send()
            .await?;
        decode(check(response).await?).await
    }

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no record has that id; other
    /// `ApiError` variants for request failures.
    pub async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        let response = self.client.delete(self.user_url(id)).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Map a non-success response into the error taxonomy.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    });

    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

/// Decode a JSON response body.
async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the failure message out of an `{"error": ...}` or `{"message": ...}`
/// body.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error": "connection refused"}"#).as_deref(),
            Some("connection refused")
        );
        assert_eq!(
            extract_error_message(r#"{"message": "user not found"}"#).as_deref(),
            Some("user not found")
        );
        assert_eq!(extract_error_message("<html>oops</html>"), None);
        assert_eq!(extract_error_message(r#"{"error": 42}"#), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&"http://localhost:5000/".parse().unwrap());
        assert_eq!(client.users_url(), "http://localhost:5000/users");
    }
}
