//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AutoAreaError`] via `#[from]`.

use crate::id::AreaId;

/// Top-level error for the autoarea core.
#[derive(Debug, thiserror::Error)]
pub enum AutoAreaError {
    /// Catastrophic misuse detected while setting up areas. Fatal for setup.
    #[error("configuration error")]
    Configuration(#[from] ConfigurationError),

    /// A domain value failed its invariants.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A subordinate automation controller failed.
    #[error("automation controller {name} failed")]
    Controller {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AutoAreaError {
    /// Wrap an arbitrary failure raised by a named subordinate controller.
    pub fn controller(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Controller {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Setup-time misuse that prevents an area from being configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("the relevant domain set must not be empty")]
    EmptyRelevantDomains,

    #[error("area {0} is configured more than once")]
    DuplicateArea(AreaId),
}

/// Domain invariant violations raised by builders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,

    #[error("name must not be empty")]
    EmptyName,
}
