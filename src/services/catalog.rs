use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::ServerFnError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{CatalogError, PortfolioImage, Testimonial};
use crate::services::fallback::{fallback_images, fallback_testimonials};

/// Read-only source of portfolio rows.
///
/// Implementations must return images ordered by `display_order` ascending,
/// then `created_at` descending, and only published testimonials in the same
/// order.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn portfolio_images(&self) -> Result<Vec<PortfolioImage>, CatalogError>;

    async fn testimonials(&self) -> Result<Vec<Testimonial>, CatalogError>;
}

/// Source used when no data service is configured; every fetch fails.
pub struct Unconfigured;

#[async_trait]
impl CatalogSource for Unconfigured {
    async fn portfolio_images(&self) -> Result<Vec<PortfolioImage>, CatalogError> {
        Err(CatalogError::NotConfigured)
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, CatalogError> {
        Err(CatalogError::NotConfigured)
    }
}

/// Where a loaded list came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

/// A list that finished loading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub origin: Origin,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Remote => "remote",
            Origin::Fallback => "fallback",
        }
    }
}

impl<T> Loaded<T> {
    pub fn fallback(items: Vec<T>) -> Self {
        Self {
            items,
            origin: Origin::Fallback,
        }
    }
}

/// Loads the catalog from an injected source, substituting the built-in
/// lists when the source fails or has no rows.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn portfolio(&self) -> Loaded<PortfolioImage> {
        settle("portfolio_images", self.source.portfolio_images().await, fallback_images)
    }

    pub async fn testimonials(&self) -> Loaded<Testimonial> {
        settle("testimonials", self.source.testimonials().await, fallback_testimonials)
    }
}

/// What a view shows for a catalog fetch: `None` while the request is in
/// flight, the built-in list if the call itself failed.
pub fn resolve_fetch<T>(
    fetched: Option<Result<Loaded<T>, ServerFnError>>,
    fallback: fn() -> Vec<T>,
) -> Option<Loaded<T>> {
    match fetched? {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            leptos::logging::warn!("Error fetching catalog: {e}");
            Some(Loaded::fallback(fallback()))
        }
    }
}

/// Decodes rows one at a time; a row that does not decode is logged and
/// skipped instead of failing the whole list.
pub fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<serde_json::Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<no id>")
                .to_string();
            serde_json::from_value(row)
                .map_err(|e| tracing::warn!(table, id = %id, error = %e, "skipping row"))
                .ok()
        })
        .collect()
}

fn settle<T>(
    table: &str,
    result: Result<Vec<T>, CatalogError>,
    fallback: fn() -> Vec<T>,
) -> Loaded<T> {
    match result {
        Ok(items) if !items.is_empty() => {
            tracing::debug!(table, rows = items.len(), "loaded rows from data service");
            Loaded {
                items,
                origin: Origin::Remote,
            }
        }
        Ok(_) => {
            let items = fallback();
            tracing::info!(table, fallback = items.len(), "data service returned no rows, using built-in list");
            Loaded::fallback(items)
        }
        Err(e) => {
            let items = fallback();
            tracing::warn!(table, error = %e, fallback = items.len(), "fetch failed, using built-in list");
            Loaded::fallback(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    struct Fixed {
        images: Result<Vec<PortfolioImage>, fn() -> CatalogError>,
    }

    #[async_trait]
    impl CatalogSource for Fixed {
        async fn portfolio_images(&self) -> Result<Vec<PortfolioImage>, CatalogError> {
            self.images.clone().map_err(|e| e())
        }

        async fn testimonials(&self) -> Result<Vec<Testimonial>, CatalogError> {
            Ok(vec![])
        }
    }

    fn loader(images: Result<Vec<PortfolioImage>, fn() -> CatalogError>) -> CatalogLoader {
        CatalogLoader::new(Arc::new(Fixed { images }))
    }

    fn network_error() -> CatalogError {
        CatalogError::Request("connection refused".into())
    }

    #[tokio::test]
    async fn network_error_yields_fallback_list() {
        let loaded = loader(Err(network_error)).portfolio().await;

        assert_eq!(loaded.items, fallback_images());
        assert_eq!(loaded.items.len(), 9);
        assert_eq!(loaded.origin, Origin::Fallback);
    }

    fn service_row(id: &str, category: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": format!("Image {id}"),
            "image_url": format!("/assets/gallery/{id}.jpg"),
            "category": category,
            "display_order": 1,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        })
    }

    struct Json(Vec<serde_json::Value>);

    #[async_trait]
    impl CatalogSource for Json {
        async fn portfolio_images(&self) -> Result<Vec<PortfolioImage>, CatalogError> {
            Ok(decode_rows("portfolio_images", self.0.clone()))
        }

        async fn testimonials(&self) -> Result<Vec<Testimonial>, CatalogError> {
            Ok(decode_rows("testimonials", vec![]))
        }
    }

    #[tokio::test]
    async fn bad_row_is_skipped_and_the_rest_kept() {
        let rows = vec![
            service_row("a", "bridal"),
            service_row("b", "arabic"),
            service_row("c", "festival"),
            service_row("d", "all"),
        ];
        let loaded = CatalogLoader::new(Arc::new(Json(rows))).portfolio().await;

        assert_eq!(loaded.origin, Origin::Remote);
        let ids: Vec<_> = loaded.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[tokio::test]
    async fn only_bad_rows_falls_back() {
        let rows = vec![service_row("b", "arabic")];
        let loaded = CatalogLoader::new(Arc::new(Json(rows))).portfolio().await;
        assert_eq!(loaded.origin, Origin::Fallback);
        assert_eq!(loaded.items, fallback_images());
    }

    #[test]
    fn pending_fetch_resolves_to_nothing() {
        assert_eq!(resolve_fetch::<PortfolioImage>(None, fallback_images), None);
    }

    #[test]
    fn failed_call_resolves_to_fallback() {
        let loaded = resolve_fetch(Some(Err(ServerFnError::new("offline"))), fallback_images);
        assert_eq!(loaded, Some(Loaded::fallback(fallback_images())));
    }

    #[test]
    fn finished_call_is_passed_through() {
        let mut items = fallback_images();
        items.truncate(1);
        let remote = Loaded {
            items,
            origin: Origin::Remote,
        };
        assert_eq!(
            resolve_fetch(Some(Ok(remote.clone())), fallback_images),
            Some(remote)
        );
    }

    #[tokio::test]
    async fn empty_result_yields_fallback_list() {
        let loaded = loader(Ok(vec![])).portfolio().await;
        assert_eq!(loaded.origin, Origin::Fallback);
        assert_eq!(loaded.items, fallback_images());
    }

    #[tokio::test]
    async fn remote_rows_are_kept_in_order() {
        let mut rows = fallback_images();
        rows.truncate(2);
        rows.reverse();
        rows[0].category = Category::Fusion;

        let loaded = loader(Ok(rows.clone())).portfolio().await;
        assert_eq!(loaded.origin, Origin::Remote);
        assert_eq!(loaded.items, rows);
    }

    #[tokio::test]
    async fn unconfigured_source_falls_back_for_both_lists() {
        let loader = CatalogLoader::new(Arc::new(Unconfigured));
        assert_eq!(loader.portfolio().await.origin, Origin::Fallback);

        let testimonials = loader.testimonials().await;
        assert_eq!(testimonials.origin, Origin::Fallback);
        assert_eq!(testimonials.items.len(), 4);
    }

    #[tokio::test]
    async fn empty_testimonials_fall_back() {
        let testimonials = loader(Ok(vec![])).testimonials().await;
        assert_eq!(testimonials.items, fallback_testimonials());
    }
}
