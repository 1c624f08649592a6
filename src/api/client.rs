use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::error::{OrderError, Result};
use crate::models::{FavoriteRequest, Food, OrderRequest};

/// Request timeout applied to every backend call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Thin client over the GoRestaurant JSON backend.
///
/// Covers the five endpoints the detail screen uses: food lookup, favorite
/// existence check, favorite create/delete, and order submission.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch a food record by id. A 404 maps to `FoodNotFound`.
    pub async fn fetch_food(&self, id: u64) -> Result<Food> {
        let path = format!("foods/{}", id);
        debug!(id, "fetching food");

        let response = self.http.get(self.endpoint(&path)).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(OrderError::FoodNotFound(id)),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(OrderError::Api {
                status: status.as_u16(),
                path,
            }),
        }
    }

    /// Check whether a food is currently favorited. A 404 means it is not.
    pub async fn is_favorite(&self, id: u64) -> Result<bool> {
        let path = format!("favorites/{}", id);
        debug!(id, "checking favorite");

        let response = self.http.get(self.endpoint(&path)).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(OrderError::Api {
                status: status.as_u16(),
                path,
            }),
        }
    }

    pub async fn create_favorite(&self, favorite: &FavoriteRequest) -> Result<()> {
        debug!(id = favorite.id, "creating favorite");

        let response = self
            .http
            .post(self.endpoint("favorites"))
            .json(favorite)
            .send()
            .await?;
        Self::expect_success(response, "favorites")
    }

    pub async fn delete_favorite(&self, id: u64) -> Result<()> {
        let path = format!("favorites/{}", id);
        debug!(id, "deleting favorite");

        let response = self.http.delete(self.endpoint(&path)).send().await?;
        Self::expect_success(response, &path)
    }

    pub async fn submit_order(&self, order: &OrderRequest) -> Result<()> {
        debug!(product_id = order.product_id, "submitting order");

        let response = self
            .http
            .post(self.endpoint("orders"))
            .json(order)
            .send()
            .await?;
        Self::expect_success(response, "orders")
    }

    fn expect_success(response: reqwest::Response, path: &str) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(OrderError::Api {
                status: status.as_u16(),
                path: path.to_string(),
            })
        }
    }
}
