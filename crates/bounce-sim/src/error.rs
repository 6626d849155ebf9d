//! Error types for store mutation and simulation setup.

use thiserror::Error;

use bounce_core::error::ComponentError;
use bounce_core::types::EntityId;

/// Errors from attaching data to entities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),

    #[error("invalid component for entity {id}: {source}")]
    InvalidComponent {
        id: EntityId,
        #[source]
        source: ComponentError,
    },
}

/// Errors from building or configuring a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
