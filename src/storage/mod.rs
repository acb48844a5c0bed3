//! Durable cart identifier storage.
//!
//! The cart identifier is the only durable state this crate owns; the
//! backend owns everything else. Stores are deliberately tiny: load, save
//! (overwriting any previous value) and clear.

mod file;
mod in_memory;

use thiserror::Error;

use crate::cart::CartId;

pub use file::FileCartIdStore;
pub use in_memory::InMemoryCartIdStore;

/// Storage for the persisted cart identifier.
pub trait CartIdStore: Send + Sync {
    /// Returns the stored identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be read.
    fn load(&self) -> Result<Option<CartId>, StorageError>;

    /// Stores an identifier, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be written.
    fn save(&self, id: &CartId) -> Result<(), StorageError>;

    /// Removes the stored identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage cannot be written.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Cart identifier storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("cart id storage i/o")]
    Io(#[from] std::io::Error),
}
