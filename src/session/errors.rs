//! Session errors.

use std::sync::Arc;

use thiserror::Error;

use crate::{client::ClientError, storage::StorageError};

/// Errors surfaced by [`crate::session::CartSession`].
#[derive(Debug, Error)]
pub enum CartError {
    /// The backend call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Reading or writing the persisted cart identifier failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// An update or removal was requested with no cart identifier stored.
    /// Nothing was sent to the backend.
    #[error("no active cart to modify")]
    NoActiveCart,

    /// A cart fetch failed. All callers awaiting the same in-flight fetch
    /// receive the same shared failure.
    #[error("cart fetch failed: {0}")]
    Fetch(Arc<CartError>),

    /// The in-flight fetch was dropped before it settled, so no result was
    /// broadcast to the callers awaiting it.
    #[error("cart fetch was interrupted before completing")]
    FetchInterrupted,
}
