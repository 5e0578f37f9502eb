//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use crate::state::CategoryId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// The `Display` text of each variant is the message sent to the client;
/// the carried detail is only logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// The path segment after `/api/categories/` is not an integer
    #[error("Invalid category ID")]
    InvalidCategoryId(String),

    /// The request body could not be decoded as a category
    #[error("Invalid request body")]
    InvalidRequestBody(String),

    /// No category with the given ID exists
    #[error("Category not found")]
    CategoryNotFound(CategoryId),

    /// The HTTP method is not supported on the matched route
    #[error("Method not allowed")]
    MethodNotAllowed(String),

    /// No route matches the request path
    #[error("Not found")]
    NotFound(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCategoryId(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            AppError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status.as_u16(), cause = ?self, "Request rejected");

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
