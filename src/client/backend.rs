//! Backend seam.

use std::num::NonZeroU32;

use async_trait::async_trait;
use mockall::automock;

use crate::cart::{Cart, CartId, LineId, VariantId};

use super::errors::ClientError;

/// Cart operations offered by the commerce backend.
///
/// Every mutation is a full round-trip returning the complete updated cart;
/// there is no partial or optimistic variant. Quantities are [`NonZeroU32`]
/// so a zero-quantity update cannot be expressed: quantity-to-zero requests
/// are removals and must be routed to [`CommerceBackend::lines_remove`].
#[automock]
#[async_trait]
pub trait CommerceBackend: Send + Sync {
    /// Retrieve a cart by identifier.
    ///
    /// `Ok(None)` means the backend no longer knows the id, e.g. after the
    /// cart expired or was turned into an order.
    async fn cart(&self, id: &CartId) -> Result<Option<Cart>, ClientError>;

    /// Create a fresh, empty cart.
    async fn cart_create(&self) -> Result<Cart, ClientError>;

    /// Add `quantity` units of a variant to the cart.
    async fn lines_add(
        &self,
        id: &CartId,
        variant: &VariantId,
        quantity: NonZeroU32,
    ) -> Result<Cart, ClientError>;

    /// Change the quantity of an existing line.
    async fn lines_update(
        &self,
        id: &CartId,
        line: &LineId,
        quantity: NonZeroU32,
    ) -> Result<Cart, ClientError>;

    /// Remove a line from the cart.
    async fn lines_remove(&self, id: &CartId, line: &LineId) -> Result<Cart, ClientError>;
}
