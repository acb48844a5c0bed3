//! Cart session: the single owner of client-side cart state.
//!
//! One [`CartSession`] is created per application session with its backend
//! and identifier store injected, then cloned freely; all clones share the
//! same state. Consumers read snapshots with [`CartSession::cart`] or watch
//! for changes with [`CartSession::subscribe`].
//!
//! Two pieces of coordination live here:
//!
//! * **Fetch deduplication** — a single-slot in-flight guard. Callers who
//!   request a refresh while one is outstanding await the same result
//!   instead of issuing a duplicate network call. The slot is cleared when
//!   the in-flight fetch settles, so a failure never wedges later fetches.
//! * **Mutation serialization** — add/update/remove run under a fair async
//!   mutex, so concurrent mutations execute in submission order and the
//!   last-submitted mutation determines the final state.

pub mod errors;

use std::{
    num::NonZeroU32,
    sync::{
        Arc, Mutex as StdMutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use tokio::sync::{Mutex, watch};
use tracing::{debug, info};

use crate::{
    cart::{Cart, LineId, VariantId},
    client::CommerceBackend,
    storage::CartIdStore,
};

pub use errors::CartError;

/// Result broadcast to every caller of a deduplicated fetch.
type FetchOutcome = Result<Cart, Arc<CartError>>;

type InflightSlot = StdMutex<Option<watch::Receiver<Option<FetchOutcome>>>>;

/// Shared handle over the session state. Cheap to clone.
#[derive(Clone)]
pub struct CartSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    backend: Arc<dyn CommerceBackend>,
    store: Arc<dyn CartIdStore>,

    /// Latest formatted cart; `None` until fetched or after clearing.
    state: watch::Sender<Option<Cart>>,

    /// Single-slot guard for the in-flight fetch.
    inflight: InflightSlot,

    /// Fair lock serializing mutations in submission order.
    mutations: Mutex<()>,

    /// Count of operations currently in flight.
    loading: AtomicUsize,

    /// Latches true once the first fetch settles, success or failure.
    fetched: AtomicBool,
}

impl std::fmt::Debug for CartSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartSession")
            .field("is_loading", &self.is_loading())
            .field("is_fetched", &self.is_fetched())
            .finish_non_exhaustive()
    }
}

impl CartSession {
    /// Creates a session from its injected dependencies.
    #[must_use]
    pub fn new(backend: Arc<dyn CommerceBackend>, store: Arc<dyn CartIdStore>) -> Self {
        let (state, _) = watch::channel(None);

        Self {
            inner: Arc::new(SessionInner {
                backend,
                store,
                state,
                inflight: StdMutex::new(None),
                mutations: Mutex::new(()),
                loading: AtomicUsize::new(0),
                fetched: AtomicBool::new(false),
            }),
        }
    }

    /// Snapshot of the current cart, if one has been fetched.
    #[must_use]
    pub fn cart(&self) -> Option<Cart> {
        self.inner.state.borrow().clone()
    }

    /// Watch channel following every cart state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Cart>> {
        self.inner.state.subscribe()
    }

    /// True while any fetch or mutation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.loading.load(Ordering::Acquire) > 0
    }

    /// True once the first fetch has settled, regardless of outcome.
    #[must_use]
    pub fn is_fetched(&self) -> bool {
        self.inner.fetched.load(Ordering::Acquire)
    }

    /// Fetches the cart from the backend, deduplicating concurrent calls.
    ///
    /// With a stored identifier the cart is queried; a stale identifier
    /// falls back to creating a fresh cart. With no stored identifier a
    /// cart is created directly. The returned cart's identifier is
    /// persisted, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Fetch failures arrive as [`CartError::Fetch`], shared between every
    /// caller of the deduplicated fetch. The in-memory cart state is left
    /// unchanged on failure.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Cart, CartError> {
        let role = {
            let mut slot = lock(&self.inner.inflight);

            if let Some(rx) = slot.as_ref() {
                Role::Joiner(rx.clone())
            } else {
                let (tx, rx) = watch::channel(None);
                *slot = Some(rx);
                Role::Leader(tx)
            }
        };

        match role {
            Role::Joiner(mut rx) => {
                debug!("joining in-flight cart fetch");

                let Ok(settled) = rx.wait_for(|settled| settled.is_some()).await else {
                    // The leader was dropped before broadcasting a result.
                    return Err(CartError::FetchInterrupted);
                };
                let outcome = settled.clone();

                match outcome {
                    Some(Ok(cart)) => Ok(cart),
                    Some(Err(shared)) => Err(CartError::Fetch(shared)),
                    None => Err(CartError::FetchInterrupted),
                }
            }
            Role::Leader(tx) => {
                // Cleared on drop even if the fetch is cancelled mid-flight.
                let clear = ClearInflight {
                    slot: &self.inner.inflight,
                };

                // Fetches queue behind mutations on the same fair lock, so a
                // slow fetch cannot publish an older snapshot over the result
                // of a mutation that finished after it started.
                let _serial = self.inner.mutations.lock().await;
                let _loading = self.loading_guard();

                let outcome: FetchOutcome = self.fetch_and_store().await.map_err(Arc::new);

                // Latch before broadcasting so joiners never resolve while
                // `is_fetched` still reads false.
                self.inner.fetched.store(true, Ordering::Release);
                tx.send_replace(Some(outcome.clone()));
                drop(clear);

                outcome.map_err(CartError::Fetch)
            }
        }
    }

    /// Adds `quantity` units of a variant, creating a cart first when none
    /// is stored.
    ///
    /// # Errors
    ///
    /// Propagates backend and storage failures; on failure the in-memory
    /// cart state is left unchanged.
    #[tracing::instrument(skip(self), fields(variant = %variant, quantity = quantity.get()))]
    pub async fn add_to_cart(
        &self,
        variant: &VariantId,
        quantity: NonZeroU32,
    ) -> Result<Cart, CartError> {
        let _serial = self.inner.mutations.lock().await;
        let _loading = self.loading_guard();

        let cart_id = match self.inner.store.load()? {
            Some(id) => id,
            None => {
                let created = self.inner.backend.cart_create().await?;
                self.inner.store.save(&created.id)?;
                created.id
            }
        };

        let cart = self
            .inner
            .backend
            .lines_add(&cart_id, variant, quantity)
            .await?;

        info!(cart_id = %cart.id, "added variant to cart");

        self.apply(cart)
    }

    /// Sets the quantity of an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NoActiveCart`] when no cart identifier is
    /// stored; nothing is sent to the backend in that case.
    #[tracing::instrument(skip(self), fields(line = %line, quantity = quantity.get()))]
    pub async fn update_cart_item(
        &self,
        line: &LineId,
        quantity: NonZeroU32,
    ) -> Result<Cart, CartError> {
        let _serial = self.inner.mutations.lock().await;
        let _loading = self.loading_guard();

        let cart_id = self.inner.store.load()?.ok_or(CartError::NoActiveCart)?;

        let cart = self
            .inner
            .backend
            .lines_update(&cart_id, line, quantity)
            .await?;

        self.apply(cart)
    }

    /// Removes a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NoActiveCart`] when no cart identifier is
    /// stored.
    #[tracing::instrument(skip(self), fields(line = %line))]
    pub async fn remove_from_cart(&self, line: &LineId) -> Result<Cart, CartError> {
        let _serial = self.inner.mutations.lock().await;
        let _loading = self.loading_guard();

        let cart_id = self.inner.store.load()?.ok_or(CartError::NoActiveCart)?;

        let cart = self.inner.backend.lines_remove(&cart_id, line).await?;

        self.apply(cart)
    }

    /// Routes a quantity change: zero removes the line, anything else
    /// updates it. The backend rejects zero-quantity updates, so the floor
    /// is enforced here.
    ///
    /// # Errors
    ///
    /// Same as [`CartSession::update_cart_item`] and
    /// [`CartSession::remove_from_cart`].
    pub async fn set_line_quantity(&self, line: &LineId, quantity: u32) -> Result<Cart, CartError> {
        match NonZeroU32::new(quantity) {
            Some(quantity) => self.update_cart_item(line, quantity).await,
            None => {
                debug!(line = %line, "quantity zero routed to removal");
                self.remove_from_cart(line).await
            }
        }
    }

    /// Forgets the cart client-side: clears the persisted identifier and
    /// nulls the in-memory state. Used after checkout completion. The
    /// backend-side cart lifecycle is not affected.
    ///
    /// # Errors
    ///
    /// Propagates identifier storage failures.
    pub fn clear_cart(&self) -> Result<(), CartError> {
        self.inner.store.clear()?;
        self.inner.state.send_replace(None);
        info!("cleared cart");

        Ok(())
    }

    async fn fetch_and_store(&self) -> Result<Cart, CartError> {
        let cart = match self.inner.store.load()? {
            Some(id) => match self.inner.backend.cart(&id).await? {
                Some(cart) => cart,
                None => {
                    debug!(cart_id = %id, "stored cart no longer exists, creating a new one");
                    self.inner.backend.cart_create().await?
                }
            },
            None => self.inner.backend.cart_create().await?,
        };

        self.apply(cart)
    }

    /// Persists the cart id and publishes the new state. Only called with
    /// carts the backend actually returned, never with locally derived
    /// state.
    fn apply(&self, cart: Cart) -> Result<Cart, CartError> {
        self.inner.store.save(&cart.id)?;
        self.inner.state.send_replace(Some(cart.clone()));

        Ok(cart)
    }

    fn loading_guard(&self) -> LoadingGuard<'_> {
        self.inner.loading.fetch_add(1, Ordering::AcqRel);
        LoadingGuard(&self.inner.loading)
    }
}

enum Role {
    Leader(watch::Sender<Option<FetchOutcome>>),
    Joiner(watch::Receiver<Option<FetchOutcome>>),
}

struct LoadingGuard<'a>(&'a AtomicUsize);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

struct ClearInflight<'a> {
    slot: &'a InflightSlot,
}

impl Drop for ClearInflight<'_> {
    fn drop(&mut self) {
        *lock(self.slot) = None;
    }
}

fn lock<T>(mutex: &StdMutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
