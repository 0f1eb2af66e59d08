//! Browser transport for the food collection.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since there is no browser `fetch`.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are returned unchanged; the page
//! turns them into notices. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use menu::config::DEFAULT_BASE_URL;
use menu::{ApiError, Food, FoodApi, FoodId, NewFood};

/// Base URL baked in at build time, e.g. `MENU_API_BASE_URL=https://api.example trunk build`.
const BUILD_BASE_URL: Option<&str> = option_env!("MENU_API_BASE_URL");

/// `gloo-net` implementation of [`FoodApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpFoodApi {
    base_url: String,
}

impl HttpFoodApi {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Client for the base URL set at build time, or the local default.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(BUILD_BASE_URL.unwrap_or(DEFAULT_BASE_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "csr")]
fn request_error(error: gloo_net::Error) -> ApiError {
    ApiError::Request(error.to_string())
}

#[cfg(feature = "csr")]
async fn check_status(
    resp: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    check_status(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list(&self) -> Result<Vec<Food>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = menu::api::foods_url(&self.base_url);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(request_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, food: &NewFood) -> Result<Food, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = menu::api::foods_url(&self.base_url);
            let resp = gloo_net::http::Request::post(&url)
                .json(food)
                .map_err(request_error)?
                .send()
                .await
                .map_err(request_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = food;
            Err(ApiError::Unavailable)
        }
    }

    async fn update(&self, id: FoodId, food: &Food) -> Result<Food, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = menu::api::food_url(&self.base_url, id);
            let resp = gloo_net::http::Request::put(&url)
                .json(food)
                .map_err(request_error)?
                .send()
                .await
                .map_err(request_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, food);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, id: FoodId) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = menu::api::food_url(&self.base_url, id);
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(request_error)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
