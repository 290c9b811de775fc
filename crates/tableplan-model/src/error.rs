//! Service-side provisioning errors.
//!
//! A [`ProvisionError`] carries whatever the database service reported,
//! unmodified: the machine-readable error code (e.g.
//! `ResourceInUseException`, `LimitExceededException`, `AccessDeniedException`)
//! and the human-readable message. This crate never classifies or retries
//! these errors; it only preserves them for the caller.

use std::fmt;

/// An error surfaced from the table-provisioning service call.
#[derive(Debug)]
pub struct ProvisionError {
    /// The machine-readable error code reported by the service, if any.
    pub code: Option<String>,
    /// The human-readable error message.
    pub message: String,
    /// The underlying client or transport error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "ProvisionError({code}): {}", self.message),
            None => write!(f, "ProvisionError: {}", self.message),
        }
    }
}

impl std::error::Error for ProvisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl ProvisionError {
    /// Create an error from a service error code and message.
    #[must_use]
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            source: None,
        }
    }

    /// Create an error without a service code (transport failures, request
    /// construction failures).
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}
