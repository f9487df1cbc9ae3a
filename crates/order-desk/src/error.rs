//! Error type shared by the four stores, their clients and the services above them.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur while reading or writing a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the requested id.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The store task is gone.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A lifecycle hook refused the operation (e.g. a cascade could not complete).
    #[error("Store rejected request: {0}")]
    Rejected(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Maps a framework error for the table holding `entity` rows.
    pub fn from_framework(entity: &'static str, e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => StoreError::NotFound { entity, id },
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                StoreError::Unavailable(format!("{entity} store: {e}"))
            }
            FrameworkError::IdsExhausted => StoreError::Rejected(format!("{entity} store: {e}")),
            FrameworkError::EntityError(inner) => StoreError::Rejected(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_store_errors() {
        let missing = StoreError::from_framework("Order", FrameworkError::NotFound("4".into()));
        assert!(matches!(missing, StoreError::NotFound { entity: "Order", ref id } if id == "4"));

        let closed = StoreError::from_framework("Order", FrameworkError::ActorClosed);
        assert!(matches!(closed, StoreError::Unavailable(_)));

        let full = StoreError::from_framework("Order", FrameworkError::IdsExhausted);
        assert!(matches!(full, StoreError::Rejected(ref msg) if msg.contains("No ids left")));
    }
}
