//! Typed method dispatch
//!
//! Each category route family accepts a fixed set of HTTP methods. The
//! enums here name those operations; converting from a `Method` fails with
//! `AppError::MethodNotAllowed` for anything else.

use crate::error::AppError;
use axum::http::Method;

/// Operations on `/api/categories`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionRoute {
    /// GET - list all categories
    List,
    /// POST - create a category
    Create,
}

/// Operations on `/api/categories/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRoute {
    /// GET - fetch one category
    Get,
    /// PUT - replace one category
    Update,
    /// DELETE - remove one category
    Delete,
}

impl TryFrom<&Method> for CollectionRoute {
    type Error = AppError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(CollectionRoute::List),
            Method::POST => Ok(CollectionRoute::Create),
            _ => Err(AppError::MethodNotAllowed(method.to_string())),
        }
    }
}

impl TryFrom<&Method> for ItemRoute {
    type Error = AppError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(ItemRoute::Get),
            Method::PUT => Ok(ItemRoute::Update),
            Method::DELETE => Ok(ItemRoute::Delete),
            _ => Err(AppError::MethodNotAllowed(method.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_routes() {
        assert_eq!(
            CollectionRoute::try_from(&Method::GET).unwrap(),
            CollectionRoute::List
        );
        assert_eq!(
            CollectionRoute::try_from(&Method::POST).unwrap(),
            CollectionRoute::Create
        );
        for method in [Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
            assert!(matches!(
                CollectionRoute::try_from(&method),
                Err(AppError::MethodNotAllowed(_))
            ));
        }
    }

    #[test]
    fn test_item_routes() {
        assert_eq!(ItemRoute::try_from(&Method::GET).unwrap(), ItemRoute::Get);
        assert_eq!(ItemRoute::try_from(&Method::PUT).unwrap(), ItemRoute::Update);
        assert_eq!(
            ItemRoute::try_from(&Method::DELETE).unwrap(),
            ItemRoute::Delete
        );
        for method in [Method::POST, Method::PATCH, Method::OPTIONS] {
            assert!(matches!(
                ItemRoute::try_from(&method),
                Err(AppError::MethodNotAllowed(_))
            ));
        }
    }

    #[test]
    fn test_extension_method_not_allowed() {
        let method = Method::from_bytes(b"PURGE").unwrap();
        match ItemRoute::try_from(&method) {
            Err(AppError::MethodNotAllowed(name)) => assert_eq!(name, "PURGE"),
            other => panic!("Expected MethodNotAllowed, got: {:?}", other),
        }
    }
}
