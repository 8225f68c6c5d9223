//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` is the context that flows through command processing.
//! Handlers attach it to their log records so that a write can be traced back
//! to the request that caused it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata context for command handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links related operations across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "api", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates empty command metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture. Only available in test builds.
    pub fn test_fixture() -> Self {
        Self::new()
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_empty_metadata() {
        let metadata = CommandMetadata::new();

        assert!(metadata.correlation_id.is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new();

        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn correlation_id_returns_set_value() {
        let metadata = CommandMetadata::new().with_correlation_id("my-correlation-id");

        assert_eq!(metadata.correlation_id(), "my-correlation-id");
    }

    #[test]
    fn serialization_skips_none_fields() {
        let json = serde_json::to_string(&CommandMetadata::new()).unwrap();

        assert_eq!(json, "{}");
    }

    #[test]
    fn test_fixture_creates_valid_metadata() {
        let metadata = CommandMetadata::test_fixture();

        assert_eq!(metadata.correlation_id(), "test-correlation-id");
        assert_eq!(metadata.source(), Some("test"));
    }
}
