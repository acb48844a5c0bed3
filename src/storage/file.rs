//! File-backed cart identifier store.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::cart::CartId;

use super::{CartIdStore, StorageError};

/// Persists the cart identifier as a single token file.
///
/// A missing or empty file means no cart. Two processes pointing at the same
/// file will overwrite each other's identifier, mirroring how two tabs share
/// one local-storage key; there is no cross-process coordination.
#[derive(Debug, Clone)]
pub struct FileCartIdStore {
    path: PathBuf,
}

impl FileCartIdStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartIdStore for FileCartIdStore {
    fn load(&self) -> Result<Option<CartId>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| CartId::new(token)))
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, id: &CartId) -> Result<(), StorageError> {
        fs::write(&self.path, id.as_str())?;
        debug!(path = %self.path.display(), "persisted cart id");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn round_trips_an_identifier() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartIdStore::new(dir.path().join("cart-id"));

        assert_eq!(store.load()?, None);

        store.save(&CartId::new("gid://shop/Cart/9"))?;

        assert_eq!(store.load()?, Some(CartId::new("gid://shop/Cart/9")));

        store.clear()?;

        assert_eq!(store.load()?, None);

        Ok(())
    }

    #[test]
    fn clear_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileCartIdStore::new(dir.path().join("cart-id"));

        store.clear()?;
        store.clear()?;

        Ok(())
    }

    #[test]
    fn whitespace_only_file_means_no_cart() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart-id");
        fs::write(&path, "\n")?;

        let store = FileCartIdStore::new(path);

        assert_eq!(store.load()?, None);

        Ok(())
    }
}
