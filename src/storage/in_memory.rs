//! In-memory cart identifier store.

use std::sync::{Mutex, PoisonError};

use crate::cart::CartId;

use super::{CartIdStore, StorageError};

/// Holds the cart identifier in memory only; gone on restart.
#[derive(Debug, Default)]
pub struct InMemoryCartIdStore {
    slot: Mutex<Option<CartId>>,
}

impl InMemoryCartIdStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with an identifier.
    #[must_use]
    pub fn with_id(id: CartId) -> Self {
        Self {
            slot: Mutex::new(Some(id)),
        }
    }
}

impl CartIdStore for InMemoryCartIdStore {
    fn load(&self) -> Result<Option<CartId>, StorageError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, id: &CartId) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(id.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
