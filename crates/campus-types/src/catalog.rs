//! Book catalog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Book rating, as stored by the catalog backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Average,
    Bad,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Average => write!(f, "average"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// Catalog book record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Backend primary key
    pub id: i64,
    /// Title
    pub name: String,
    /// Author
    pub author: String,
    /// Rating
    pub rating: Rating,
    /// Upload timestamp (set by the backend)
    pub uploaded: DateTime<Utc>,
}

/// New or updated book payload (the backend assigns `id` and `uploaded`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    /// Title
    pub name: String,
    /// Author
    pub author: String,
    /// Rating
    pub rating: Rating,
}

/// Catalog list filters
///
/// Maps to the backend's filter set: substring match on name/author, exact
/// match on rating, and an upload-date window.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    /// Substring match on title
    pub name: Option<String>,
    /// Substring match on author
    pub author: Option<String>,
    /// Exact rating match
    pub rating: Option<Rating>,
    /// Uploaded on or after this date (YYYY-MM-DD)
    pub uploaded_after: Option<chrono::NaiveDate>,
    /// Uploaded on or before this date (YYYY-MM-DD)
    pub uploaded_before: Option<chrono::NaiveDate>,
}

impl BookFilter {
    /// Render as query parameters, skipping unset fields
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(author) = &self.author {
            params.push(("author", author.clone()));
        }
        if let Some(rating) = self.rating {
            params.push(("rating", rating.to_string()));
        }
        if let Some(after) = self.uploaded_after {
            params.push(("uploaded_after", after.format("%Y-%m-%d").to_string()));
        }
        if let Some(before) = self.uploaded_before {
            params.push(("uploaded_before", before.format("%Y-%m-%d").to_string()));
        }
        params
    }
}
