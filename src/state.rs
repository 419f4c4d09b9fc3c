use std::sync::Arc;

use crate::services::catalog::{CatalogLoader, CatalogSource};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogLoader,
    pub booking_embed_url: String,
}

impl AppState {
    pub fn new(source: Arc<dyn CatalogSource>, booking_embed_url: String) -> Self {
        Self {
            catalog: CatalogLoader::new(source),
            booking_embed_url,
        }
    }
}
