//! API response envelope

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard API response wrapper
///
/// Every endpoint answers with this envelope; clients branch on `success`
/// and show `message` to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Machine-readable error code (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Field-specific validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error_code: None,
            errors: None,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ApiResponse<()> {
    /// Create a successful response without a payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error_code: None,
            errors: None,
        }
    }

    /// Create an error response
    pub fn error(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error_code: Some(error_code.into()),
            errors: None,
        }
    }

    /// Attach field-level validation errors
    pub fn with_field_errors(mut self, errors: HashMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }
}
