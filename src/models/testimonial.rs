use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

/// A client testimonial row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    #[serde(default)]
    pub client_initial: Option<String>,
    pub testimonial_text: String,
    pub occasion: String,
    pub rating: u8,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub display_order: i32,
    #[serde(default = "published")]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

fn published() -> bool {
    true
}

impl Testimonial {
    /// Text for the avatar bubble when there is no photo.
    pub fn initials(&self) -> String {
        match self.client_initial.as_deref().map(str::trim) {
            Some(initial) if !initial.is_empty() => initial.to_string(),
            _ => self
                .client_name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
        }
    }

    /// One flag per star, filled for each point of the rating.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let filled = self.rating.min(MAX_RATING) as usize;
        std::array::from_fn(|i| i < filled)
    }
}
