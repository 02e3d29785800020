//! HTTP client for the library circulation backend.
//!
//! One method per endpoint, thin by design: the backend owns every business
//! rule, so the client only moves JSON. Mutating calls discard the response
//! body — callers follow every successful mutation with a full re-fetch of
//! the affected collection, so nothing here is worth decoding.

use reqwest::Client;

use crate::config::ApiConfig;
use crate::models::{Book, BookPayload, Loan, Member, MemberUpdate, NewLoan, NewMember};

/// Error type for backend API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connection, DNS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not decode as the expected document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },
}

/// Client for the library circulation API.
///
/// All paths hang off a base URL ending in `/api`. There is no retry and no
/// request cancellation: a failed call is terminal for that attempt and the
/// user re-acts explicitly.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    /// Base URL for the API, without trailing slash
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl LibraryClient {
    /// Create a client for the given configuration.
    ///
    /// Fails only if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a non-2xx response into [`ApiError::Status`], carrying the
    /// response body as the message.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::warn!(status, %message, "backend rejected request");
        Err(ApiError::Status { status, message })
    }

    async fn get_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = Self::check(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = builder.json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    // Books

    /// Fetch the full book collection.
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.get_list("books").await
    }

    /// Create a book.
    pub async fn create_book(&self, payload: &BookPayload) -> Result<(), ApiError> {
        self.send_json(self.client.post(self.url("books")), payload)
            .await
    }

    /// Update the book with the given id.
    pub async fn update_book(&self, id: &str, payload: &BookPayload) -> Result<(), ApiError> {
        self.send_json(self.client.put(self.url(&format!("books/{}", id))), payload)
            .await
    }

    /// Delete the book with the given id.
    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("books/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // Members

    /// Fetch the full member collection.
    pub async fn list_members(&self) -> Result<Vec<Member>, ApiError> {
        self.get_list("members").await
    }

    /// Register a member.
    pub async fn create_member(&self, payload: &NewMember) -> Result<(), ApiError> {
        self.send_json(self.client.post(self.url("members")), payload)
            .await
    }

    /// Update name and email of the member with the given id.
    pub async fn update_member(&self, id: &str, payload: &MemberUpdate) -> Result<(), ApiError> {
        self.send_json(
            self.client.put(self.url(&format!("members/{}", id))),
            payload,
        )
        .await
    }

    /// Delete the member with the given id.
    pub async fn delete_member(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("members/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // Loans

    /// Fetch the full loan collection, with embedded book/member summaries.
    pub async fn list_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.get_list("loans").await
    }

    /// Record a loan.
    pub async fn create_loan(&self, payload: &NewLoan) -> Result<(), ApiError> {
        self.send_json(self.client.post(self.url("loans")), payload)
            .await
    }

    /// Mark the loan with the given id as returned.
    ///
    /// Copy-count bookkeeping happens server-side; the client only learns
    /// the new `returnedAt` from the next list fetch.
    pub async fn return_loan(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("loans/return/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Delete the loan with the given id.
    pub async fn delete_loan(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("loans/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> LibraryClient {
        let config = ApiConfig::new().with_base_url("http://localhost:3000/api");
        LibraryClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let client = test_client();
        assert_eq!(client.url("books"), "http://localhost:3000/api/books");
        assert_eq!(
            client.url("loans/return/l1"),
            "http://localhost:3000/api/loans/return/l1"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Json(_)));
    }
}
