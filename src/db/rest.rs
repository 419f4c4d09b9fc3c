use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::models::{CatalogError, PortfolioImage, Testimonial};
use crate::services::catalog::{decode_rows, CatalogSource};

const ORDER: &str = "display_order.asc,created_at.desc";

/// Hosted PostgREST data service (`/rest/v1/<table>`)
pub struct RestSource {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl RestSource {
    pub fn new(client: Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<T>, CatalogError> {
        let res = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .query(&[("select", "*"), ("order", ORDER)])
            .query(filters)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(decode_rows(table, rows))
    }
}

#[async_trait]
impl CatalogSource for RestSource {
    async fn portfolio_images(&self) -> Result<Vec<PortfolioImage>, CatalogError> {
        self.select("portfolio_images", &[]).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, CatalogError> {
        self.select("testimonials", &[("is_published", "eq.true")])
            .await
    }
}
