//! `reqwest` transport for the `/foods` collection.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use std::time::Duration;

use menu::api::{food_url, foods_url};
use menu::{ApiError, Food, FoodApi, FoodId, MenuConfig, NewFood};
use serde::de::DeserializeOwned;

pub struct RestFoodApi {
    http: reqwest::Client,
    base_url: String,
}

impl RestFoodApi {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(config: &MenuConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        check_status(status, body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        parse_body(&self.send(request).await?)
    }
}

/// Pass a 2xx body through; anything else becomes [`ApiError::Status`].
pub(crate) fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl FoodApi for RestFoodApi {
    async fn list(&self) -> Result<Vec<Food>, ApiError> {
        let url = foods_url(&self.base_url);
        tracing::debug!(%url, "GET");
        self.send_json(self.http.get(url)).await
    }

    async fn create(&self, food: &NewFood) -> Result<Food, ApiError> {
        let url = foods_url(&self.base_url);
        tracing::debug!(%url, "POST");
        self.send_json(self.http.post(url).json(food)).await
    }

    async fn update(&self, id: FoodId, food: &Food) -> Result<Food, ApiError> {
        let url = food_url(&self.base_url, id);
        tracing::debug!(%url, "PUT");
        self.send_json(self.http.put(url).json(food)).await
    }

    async fn delete(&self, id: FoodId) -> Result<(), ApiError> {
        let url = food_url(&self.base_url, id);
        tracing::debug!(%url, "DELETE");
        self.send(self.http.delete(url)).await.map(|_| ())
    }
}
