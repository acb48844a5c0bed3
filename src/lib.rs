//! Trolley
//!
//! Trolley keeps a shopper's cart synchronized with a headless commerce
//! backend. It wraps the backend's GraphQL cart operations in a typed client,
//! owns the client-side cart state for a session, deduplicates concurrent
//! fetches, and persists the cart identifier so a cart survives restarts.
//!
//! The crate is a library with no UI of its own: hosts construct a
//! [`session::CartSession`] from a [`client::CommerceBackend`] implementation
//! and a [`storage::CartIdStore`], then drive it from their event loop.

pub mod cart;
pub mod client;
pub mod config;
pub mod ids;
pub mod money;
pub mod session;
pub mod storage;

#[cfg(test)]
mod test;
