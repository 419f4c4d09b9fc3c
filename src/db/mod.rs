mod rest;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Sqlite};

use crate::config::Config;
use crate::models::{CatalogError, Category, PortfolioImage, Testimonial};
use crate::services::catalog::{CatalogSource, Unconfigured};

pub use rest::RestSource;

pub type Db = Pool<Sqlite>;

/// Picks the data source the configuration asks for.
pub async fn connect(config: &Config) -> Result<Arc<dyn CatalogSource>, CatalogError> {
    if let Some(url) = config.sqlite_url() {
        tracing::info!(url, "reading catalog from SQLite mirror");
        let db = create_pool(url).await?;
        return Ok(Arc::new(SqliteSource::new(db)));
    }

    match (&config.supabase_url, &config.supabase_anon_key) {
        (Some(url), Some(key)) => {
            tracing::info!(url = %url, "reading catalog from hosted data service");
            Ok(Arc::new(RestSource::new(reqwest::Client::new(), url, key)))
        }
        _ => {
            tracing::warn!(
                "data service not configured; set SUPABASE_URL and SUPABASE_ANON_KEY. Using built-in gallery"
            );
            Ok(Arc::new(Unconfigured))
        }
    }
}

pub async fn create_pool(url: &str) -> Result<Db, CatalogError> {
    sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(5)
        .connect(url)
        .await
        .map_err(|e| CatalogError::Database(e.to_string()))
}

/// Local read-only mirror of the hosted tables
pub struct SqliteSource {
    db: Db,
}

impl SqliteSource {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: String,
    title: String,
    description: Option<String>,
    description_key: Option<String>,
    image_url: String,
    thumbnail_url: Option<String>,
    category: String,
    tags: Option<String>,
    featured: bool,
    display_order: i32,
    created_at: String,
    updated_at: String,
}

#[derive(Debug, FromRow)]
struct TestimonialRow {
    id: String,
    client_name: String,
    client_initial: Option<String>,
    testimonial_text: String,
    occasion: String,
    rating: i64,
    image_url: Option<String>,
    is_featured: bool,
    display_order: i32,
    is_published: bool,
    created_at: String,
}

fn timestamp(raw: &str) -> Result<DateTime<Utc>, CatalogError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| CatalogError::Decode(format!("timestamp `{raw}`: {e}")))
}

impl TryFrom<ImageRow> for PortfolioImage {
    type Error = CatalogError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        let category = Category::from_str(&row.category)
            .filter(Category::is_stored)
            .ok_or_else(|| CatalogError::Decode(format!("category `{}`", row.category)))?;
        let tags = match row.tags.as_deref() {
            Some(json) if !json.is_empty() => {
                serde_json::from_str(json).map_err(|e| CatalogError::Decode(e.to_string()))?
            }
            _ => Default::default(),
        };

        Ok(PortfolioImage {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            description_key: row.description_key,
            image_url: row.image_url,
            thumbnail_url: row.thumbnail_url,
            category,
            tags,
            featured: row.featured,
            display_order: row.display_order,
            created_at: timestamp(&row.created_at)?,
            updated_at: timestamp(&row.updated_at)?,
        })
    }
}

impl TryFrom<TestimonialRow> for Testimonial {
    type Error = CatalogError;

    fn try_from(row: TestimonialRow) -> Result<Self, Self::Error> {
        Ok(Testimonial {
            id: row.id,
            client_name: row.client_name,
            client_initial: row.client_initial,
            testimonial_text: row.testimonial_text,
            occasion: row.occasion,
            rating: row.rating.clamp(0, 5) as u8,
            image_url: row.image_url,
            is_featured: row.is_featured,
            display_order: row.display_order,
            is_published: row.is_published,
            created_at: timestamp(&row.created_at)?,
        })
    }
}

fn keep_valid<R, T>(
    table: &str,
    rows: Vec<R>,
    id: fn(&R) -> String,
    convert: fn(R) -> Result<T, CatalogError>,
) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| {
            let id = id(&row);
            convert(row)
                .map_err(|e| tracing::warn!(table, id = %id, error = %e, "skipping row"))
                .ok()
        })
        .collect()
}

#[async_trait]
impl CatalogSource for SqliteSource {
    async fn portfolio_images(&self) -> Result<Vec<PortfolioImage>, CatalogError> {
        let rows: Vec<ImageRow> = sqlx::query_as(
            "SELECT * FROM portfolio_images ORDER BY display_order ASC, created_at DESC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(keep_valid("portfolio_images", rows, |row| row.id.clone(), PortfolioImage::try_from))
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, CatalogError> {
        let rows: Vec<TestimonialRow> = sqlx::query_as(
            "SELECT * FROM testimonials WHERE is_published = 1 ORDER BY display_order ASC, created_at DESC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(keep_valid("testimonials", rows, |row| row.id.clone(), Testimonial::try_from))
    }
}
