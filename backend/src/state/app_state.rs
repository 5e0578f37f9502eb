// Application state management
// Owns the category collection shared by all request handlers

use crate::state::category::{Category, CategoryId, CategoryPayload};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state as shared between handlers
pub type SharedState = Arc<RwLock<AppState>>;

/// Main application state
/// Holds the insertion-ordered category collection
#[derive(Debug, Clone)]
pub struct AppState {
    /// Categories in insertion order
    categories: Vec<Category>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            categories: Category::seed(),
        }
    }
}

impl AppState {
    /// Create a new application state holding the seed categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an application state holding exactly `categories`
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Wrap this state for sharing across handlers
    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get the number of categories in the collection
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Get a category by ID
    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Append a new category built from `payload`
    ///
    /// The ID is the collection length plus one, so an ID freed by a delete
    /// can be handed out again.
    pub fn create_category(&mut self, payload: CategoryPayload) -> Category {
        let id = self.categories.len() as CategoryId + 1;
        let category = Category::from_payload(id, payload);
        self.categories.push(category.clone());
        category
    }

    /// Replace every field of the category with the given ID
    /// Returns the stored category, or None if no category has that ID
    pub fn update_category(
        &mut self,
        id: CategoryId,
        payload: CategoryPayload,
    ) -> Option<Category> {
        let slot = self.categories.iter_mut().find(|c| c.id == id)?;
        *slot = Category::from_payload(id, payload);
        Some(slot.clone())
    }

    /// Remove the category with the given ID, keeping the order of the rest
    /// Returns the removed category if it existed
    pub fn remove_category(&mut self, id: CategoryId) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        Some(self.categories.remove(index))
    }
}
