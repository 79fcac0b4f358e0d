//! Typed error handling for repository operations
//!
//! Every fallible repository operation returns [`ApiError`], which carries
//! enough structure for clients to handle errors specifically rather than
//! parsing messages. All errors are translated at the request boundary into
//! an HTTP status plus a JSON [`ErrorResponse`]; none are retried and none
//! are fatal to the process.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.train_status(&id) {
//!     Ok(status) => println!("{:?}", status),
//!     Err(ApiError::NotFound { entity_type, id }) => {
//!         println!("{} {} not found", entity_type, id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Result alias used throughout the repository and handler layers.
pub type ApiResult<T> = Result<T, ApiError>;

/// The error taxonomy of the two repository variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A referenced entity id is absent from its collection.
    NotFound { entity_type: &'static str, id: String },

    /// A freshly generated id collided with an existing entry. Creation
    /// paths reject duplicates instead of silently upserting.
    AlreadyExists { entity_type: &'static str, id: String },

    /// A required field is missing or malformed.
    InvalidInput { field: &'static str, message: String },

    /// Order quantity exceeds the medicine's current stock.
    InsufficientStock {
        medicine_id: String,
        requested: u32,
        available: u32,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
            ApiError::AlreadyExists { entity_type, id } => {
                write!(f, "{} with id '{}' already exists", entity_type, id)
            }
            ApiError::InvalidInput { field, message } => {
                write!(f, "invalid field '{}': {}", field, message)
            }
            ApiError::InsufficientStock {
                medicine_id,
                requested,
                available,
            } => {
                write!(
                    f,
                    "insufficient stock for medicine '{}': requested {}, available {}",
                    medicine_id, requested, available
                )
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ApiError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
            ApiError::InvalidInput { .. } => "INVALID_INPUT",
            ApiError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { entity_type, id }
            | ApiError::AlreadyExists { entity_type, id } => Some(serde_json::json!({
                "entity_type": entity_type,
                "id": id,
            })),
            ApiError::InvalidInput { field, .. } => Some(serde_json::json!({ "field": field })),
            ApiError::InsufficientStock {
                medicine_id,
                requested,
                available,
            } => Some(serde_json::json!({
                "medicine_id": medicine_id,
                "requested": requested,
                "available": available,
            })),
        }
    }

    /// Shorthand constructor for the common not-found case.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Shorthand constructor for invalid-input errors.
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_returns_404() {
        let err = ApiError::not_found("train", "abc");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_already_exists_returns_409() {
        let err = ApiError::AlreadyExists {
            entity_type: "booking",
            id: "abc".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_input_returns_400() {
        let err = ApiError::invalid_input("price", "must be positive");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_insufficient_stock_returns_400_with_details() {
        let err = ApiError::InsufficientStock {
            medicine_id: "m1".to_string(),
            requested: 10,
            available: 3,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.to_response();
        assert_eq!(body.code, "INSUFFICIENT_STOCK");
        let details = body.details.unwrap();
        assert_eq!(details["requested"], 10);
        assert_eq!(details["available"], 3);
    }

    #[test]
    fn test_display_names_the_entity_and_id() {
        let err = ApiError::not_found("medicine", "m42");
        assert_eq!(err.to_string(), "medicine with id 'm42' not found");
    }
}
