//! DTOs exposed by the collection endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the customer and invoice list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    /// Optional free-form search string applied to the list.
    pub search: Option<String>,
    /// Whether to return a single page instead of the whole collection.
    pub pagination: Option<bool>,
    /// Page size when paginating.
    pub count: Option<usize>,
    /// Page number when paginating.
    pub page: Option<usize>,
}

/// Result payload of a list endpoint: the total number of matching entities
/// (collection metadata, independent of the page size) plus the requested
/// items.
#[derive(Debug, Serialize)]
pub struct CollectionResponse<T> {
    pub total: usize,
    pub items: Vec<T>,
}
