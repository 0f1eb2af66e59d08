//! Remote collection contract for `/foods`.
//!
//! ENDPOINTS
//! =========
//! - `GET    /foods`       list
//! - `POST   /foods`       create (body: [`NewFood`])
//! - `PUT    /foods/{id}`  update (body: previous record merged with edits)
//! - `DELETE /foods/{id}`  delete
//!
//! ERROR HANDLING
//! ==============
//! Implementations do not retry or validate. Every failure is handed back to
//! the caller as an [`ApiError`], which the controller turns into a notice.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::food::{Food, FoodId, NewFood};

/// Collection path relative to the API base URL.
pub const FOODS_PATH: &str = "/foods";

/// Failure of a remote collection call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// No transport is compiled into this build.
    #[error("remote collection not available in this build")]
    Unavailable,
}

/// Async access to the remote food collection.
///
/// Futures are not required to be `Send` so the browser transport can
/// implement this directly.
#[async_trait::async_trait(?Send)]
pub trait FoodApi {
    /// Fetch every record, in server order.
    async fn list(&self) -> Result<Vec<Food>, ApiError>;

    /// Create a record; the server assigns the id.
    async fn create(&self, food: &NewFood) -> Result<Food, ApiError>;

    /// Store `food` under `id` and return the server's copy.
    async fn update(&self, id: FoodId, food: &Food) -> Result<Food, ApiError>;

    /// Remove the record under `id`.
    async fn delete(&self, id: FoodId) -> Result<(), ApiError>;
}

/// `{base}/foods`
#[must_use]
pub fn foods_url(base_url: &str) -> String {
    format!("{}{FOODS_PATH}", base_url.trim_end_matches('/'))
}

/// `{base}/foods/{id}`
#[must_use]
pub fn food_url(base_url: &str, id: FoodId) -> String {
    format!("{}/{id}", foods_url(base_url))
}
