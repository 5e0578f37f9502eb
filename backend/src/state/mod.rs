// State management module
// Handles the category model and the shared in-memory collection

pub mod app_state;
pub mod category;

pub use app_state::{AppState, SharedState};
pub use category::{Category, CategoryId, CategoryPayload};
