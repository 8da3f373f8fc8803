//! Link model and query filter

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A posted link from the links table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Link {
    /// Unique link identifier
    pub id: Uuid,

    /// Target URL
    pub url: String,

    /// Short description shown in listings
    pub description: String,

    /// User who posted the link, if the poster was authenticated
    pub posted_by: Option<Uuid>,
}

/// Payload for inserting a new link
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: String,
    pub description: String,
    pub posted_by: Option<Uuid>,
}

/// Substring filter for link listings
///
/// Both fields are optional; when both are present a link matches if
/// either substring matches (case-insensitive).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkFilter {
    pub description_contains: Option<String>,
    pub url_contains: Option<String>,
}

impl LinkFilter {
    /// Whether the filter constrains anything at all
    pub fn is_empty(&self) -> bool {
        self.description_contains.is_none() && self.url_contains.is_none()
    }

    /// Case-insensitive match against a link, mirroring the SQL ILIKE
    /// conditions used by the Postgres store
    pub fn matches(&self, link: &Link) -> bool {
        if self.is_empty() {
            return true;
        }
        let desc_hit = self
            .description_contains
            .as_deref()
            .is_some_and(|s| link.description.to_lowercase().contains(&s.to_lowercase()));
        let url_hit = self
            .url_contains
            .as_deref()
            .is_some_and(|s| link.url.to_lowercase().contains(&s.to_lowercase()));
        desc_hit || url_hit
    }
}
