//! HTTP implementation of the catalog API client.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use clementine_core::Email;

use crate::catalog::{CatalogApi, CatalogError};
use crate::config::StorefrontConfig;
use crate::models::Product;

/// Client for the catalog API.
///
/// Cheaply cloneable via `Arc`. Every request is bounded by the configured
/// timeout; a hung server fails the operation instead of hanging it forever.
#[derive(Clone)]
pub struct HttpCatalogClient {
    inner: Arc<HttpCatalogClientInner>,
}

struct HttpCatalogClientInner {
    client: reqwest::Client,
    base: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

impl HttpCatalogClient {
    /// Create a new catalog API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(HttpCatalogClientInner {
                client,
                base: config.api_base_url.as_str().trim_end_matches('/').to_owned(),
            }),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base)
    }

    /// Check the response status and parse the JSON body.
    ///
    /// Reads the body as text first so failures can log a snippet of what
    /// the server actually sent.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                endpoint,
                body = %response_text.chars().take(500).collect::<String>(),
                "catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                endpoint: endpoint.to_owned(),
                status: status.as_u16(),
                body: response_text.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    endpoint,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "failed to parse catalog API response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let endpoint = self.endpoint("/products");
        let response = self.inner.client.get(&endpoint).send().await?;
        Self::parse_response(&endpoint, response).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create_product(&self, product: &Product) -> Result<Product, CatalogError> {
        let endpoint = self.endpoint("/products");
        let response = self
            .inner
            .client
            .post(&endpoint)
            .json(product)
            .send()
            .await?;
        Self::parse_response(&endpoint, response).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update_product(&self, product: &Product) -> Result<Product, CatalogError> {
        let endpoint = self.endpoint(&format!("/products/{}", product.id));
        let response = self
            .inner
            .client
            .put(&endpoint)
            .json(product)
            .send()
            .await?;
        Self::parse_response(&endpoint, response).await
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &Email, password: &SecretString) -> Result<String, CatalogError> {
        let endpoint = self.endpoint("/login");
        let response = self
            .inner
            .client
            .post(&endpoint)
            .json(&LoginRequest {
                email: email.as_str(),
                password: password.expose_secret(),
            })
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }

        let login: LoginResponse = Self::parse_response(&endpoint, response).await?;
        Ok(login.access_token)
    }
}
