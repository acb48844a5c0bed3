//! Commerce backend client.
//!
//! [`CommerceBackend`] is the seam between the session and the network.
//! [`StorefrontClient`] is the production implementation, speaking the
//! backend's GraphQL cart API over HTTPS.

mod backend;
pub mod errors;
mod queries;
mod storefront;

pub use backend::{CommerceBackend, MockCommerceBackend};
pub use errors::ClientError;
pub use storefront::StorefrontClient;
