use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Portfolio categories, in the order the filter tabs are shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Bridal,
    Minimalist,
    Festival,
    Fusion,
    Photoshoot,
    StainProgression,
}

const FILTERS: [Category; 7] = [
    Category::All,
    Category::Bridal,
    Category::Minimalist,
    Category::Festival,
    Category::Fusion,
    Category::Photoshoot,
    Category::StainProgression,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Bridal => "bridal",
            Category::Minimalist => "minimalist",
            Category::Festival => "festival",
            Category::Fusion => "fusion",
            Category::Photoshoot => "photoshoot",
            Category::StainProgression => "stain_progression",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Work",
            Category::Bridal => "Nordic Bridal",
            Category::Minimalist => "Minimalist",
            Category::Festival => "Festival",
            Category::Fusion => "Fusion Art",
            Category::Photoshoot => "Photoshoot",
            Category::StainProgression => "Stain Progression",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        FILTERS
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim().to_lowercase())
    }

    /// Every filter value, `All` first.
    pub fn all() -> &'static [Category] {
        &FILTERS
    }

    /// Position of this category in [`Category::all`], which is also its
    /// carousel page.
    pub fn position(&self) -> usize {
        FILTERS.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn at(index: usize) -> Option<Self> {
        FILTERS.get(index).copied()
    }

    /// `All` only exists as a filter; stored images always carry a concrete category.
    pub fn is_stored(&self) -> bool {
        !matches!(self, Category::All)
    }
}

fn stored_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match Category::from_str(&raw) {
        Some(category) if category.is_stored() => Ok(category),
        _ => Err(serde::de::Error::custom(format!(
            "`{raw}` is not a stored image category"
        ))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A portfolio image row as served by the data service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioImage {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, alias = "descriptionKey")]
    pub description_key: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(deserialize_with = "stored_category")]
    pub category: Category,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioImage {
    /// Source for the blurred preview: the thumbnail if there is one, otherwise the full image.
    pub fn preview_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.image_url)
    }

    /// Description text, preferring a known description key over the literal description.
    pub fn display_description(&self) -> &str {
        self.description_key
            .as_deref()
            .and_then(description_for_key)
            .unwrap_or(&self.description)
    }
}

/// Built-in descriptions referenced by `description_key`.
pub fn description_for_key(key: &str) -> Option<&'static str> {
    match key {
        "gallery.descriptions.bridalFullHand" => {
            Some("Full bridal coverage from fingertips to elbow with layered paisleys")
        }
        "gallery.descriptions.minimalistFinger" => {
            Some("Fine-line finger details inspired by Scandinavian minimalism")
        }
        "gallery.descriptions.festivalMandala" => {
            Some("A festive mandala centred on the palm")
        }
        "gallery.descriptions.fusionVines" => {
            Some("Nordic botanical vines woven into traditional motifs")
        }
        "gallery.descriptions.stainDayThree" => {
            Some("Day three of the stain, deepened to a rich mahogany")
        }
        _ => None,
    }
}

/// Errors from fetching rows from a catalog source
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Data service is not configured")]
    NotConfigured,
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Data service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode rows: {0}")]
    Decode(String),
    #[error("Database error: {0}")]
    Database(String),
}
