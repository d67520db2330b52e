//! Contract error types for the settings page
//!
//! These errors are transport-agnostic and used between the loader and its provider.

use thiserror::Error;

/// Settings provider and validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Request context carries no authenticated user
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Reason reported by the provider
        message: String,
    },
    /// Validation error on an incoming update
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// JSON Schema validation failed
    #[error("Schema validation failed: {}", .errors.join(", "))]
    SchemaValidation {
        /// Validation errors
        errors: Vec<String>,
    },
    /// Backing store failed
    #[error("Storage error: {message}")]
    Storage {
        /// Underlying store error text
        message: String,
    },
    /// Remote provider failed (network, upstream)
    #[error("Provider error: {message}")]
    Provider {
        /// Error text reported by the provider
        message: String,
    },
    /// Internal error without further detail
    #[error("Internal error")]
    Internal,
}

impl SettingsError {
    /// Raw message text carried by the fault, if any.
    ///
    /// Unlike `Display`, this is the bare text without the variant prefix, so a provider
    /// failing with `"boom"` yields `Some("boom")`.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unauthorized { message }
            | Self::Validation { message }
            | Self::Storage { message }
            | Self::Provider { message } => Some(message.clone()),
            Self::SchemaValidation { errors } => Some(errors.join(", ")),
            Self::Internal => None,
        }
    }
}
