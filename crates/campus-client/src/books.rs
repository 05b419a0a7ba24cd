//! Book catalog endpoints
//!
//! The catalog API lives under `/basic/` on the server root and supports
//! substring filters on name and author plus exact rating and upload-date
//! range filters.

use campus_types::{Book, BookFilter, NewBook};

use crate::{ApiClient, ClientError, Result};

impl ApiClient {
    /// List books matching the given filter
    pub async fn list_books(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        self.get_json("/basic/", &filter.to_query()).await
    }

    /// Fetch a single book by id
    pub async fn get_book(&self, id: i64) -> Result<Book> {
        self.get_json(&format!("/basic/{id}/"), &[]).await
    }

    /// Create a new catalog entry
    pub async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let body = serde_json::to_value(book)
            .map_err(|e| ClientError::Unknown(format!("failed to encode book: {e}")))?;
        self.post_json("/basic/", &body).await
    }

    /// Replace an existing catalog entry
    pub async fn update_book(&self, id: i64, book: &NewBook) -> Result<Book> {
        let body = serde_json::to_value(book)
            .map_err(|e| ClientError::Unknown(format!("failed to encode book: {e}")))?;
        self.put_json(&format!("/basic/{id}/"), &body).await
    }

    /// Delete a catalog entry
    pub async fn delete_book(&self, id: i64) -> Result<()> {
        self.delete(&format!("/basic/{id}/")).await
    }
}
