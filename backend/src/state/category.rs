//! Category model
//!
//! Defines the category record stored in the application state and the
//! request payload clients send to create or replace one.

use serde::{Deserialize, Serialize};

/// Unique identifier for a category
pub type CategoryId = i64;

/// Category structure
/// A named grouping with a free-form description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Server-assigned identifier
    pub id: CategoryId,
    /// Display name of the category
    pub name: String,
    /// Free-form description
    pub description: String,
}

impl Category {
    /// Create a new category with the given ID, name, and description
    pub fn new(id: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build a category from a client payload, using `id` instead of any
    /// identifier the client supplied
    pub fn from_payload(id: CategoryId, payload: CategoryPayload) -> Self {
        Self {
            id,
            name: payload.name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
        }
    }

    /// Categories present when the service starts
    pub fn seed() -> Vec<Category> {
        vec![
            Category::new(1, "Makanan", "Produk makanan"),
            Category::new(2, "Minuman", "Produk minuman"),
        ]
    }
}

/// Body of a create or update request
///
/// Every field is optional: missing or `null` strings become empty, and the
/// `id` is only type-checked, never used.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryPayload {
    /// Client-supplied identifier (always replaced by the server)
    pub id: Option<CategoryId>,
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
}
