//! The cart state container.
//!
//! [`CartStore`] owns the ordered list of cart lines for the current
//! session. It is hydrated once from storage at creation and mirrors
//! every mutation back to storage under [`CART_PRODUCTS_KEY`].
//!
//! Mutations hold the items write lock across the persistence write, so
//! each one is an atomic read-modify-persist: the persisted blob always
//! reflects the exact state the mutation produced, and no other mutation
//! can slip in between the update and the write.

use std::sync::Arc;

use gomarket_core::{CartItem, NewCartItem, ProductId};
use rust_decimal::Decimal;
use tokio::sync::{RwLock, watch};
use tracing::warn;

use crate::error::CartError;
use crate::storage::{CartStorage, StorageError};

/// Storage key under which the cart line items are persisted.
pub const CART_PRODUCTS_KEY: &str = "cart:products";

/// Shared handle to the cart state.
///
/// Cheaply cloneable; all clones observe the same state. Create one with
/// [`CartStore::hydrate`] at application start and hand clones to
/// whatever needs the cart, or install one in a task scope with
/// [`crate::with_cart`].
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    storage: Arc<dyn CartStorage>,
    items: RwLock<Vec<CartItem>>,
    changed: watch::Sender<Vec<CartItem>>,
}

impl CartStore {
    /// Create a store hydrated from `storage`.
    ///
    /// Reads the persisted blob under [`CART_PRODUCTS_KEY`]. A missing
    /// blob yields an empty cart. A blob that exists but fails to decode
    /// is logged and discarded, also yielding an empty cart, so stale or
    /// corrupt data never blocks startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage read itself fails.
    pub async fn hydrate(storage: Arc<dyn CartStorage>) -> Result<Self, CartError> {
        let items = match storage.get(CART_PRODUCTS_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<CartItem>>(&blob) {
                Ok(items) => items,
                Err(e) => {
                    warn!("discarding undecodable cart data: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(StorageError::Corrupt { path, source }) => {
                warn!(path = %path.display(), "discarding corrupt cart storage: {source}");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        let (changed, _) = watch::channel(items.clone());

        Ok(Self {
            inner: Arc::new(CartStoreInner {
                storage,
                items: RwLock::new(items),
                changed,
            }),
        })
    }

    /// Add a product to the cart.
    ///
    /// If a line with the candidate's id already exists its quantity is
    /// raised by one, exactly as [`increment`](Self::increment) would do;
    /// otherwise the candidate is appended as a new line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails. The
    /// in-memory update is kept either way.
    pub async fn add_to_cart(&self, candidate: NewCartItem) -> Result<(), CartError> {
        let mut items = self.inner.items.write().await;
        if let Some(existing) = items.iter_mut().find(|item| item.id == candidate.id) {
            existing.quantity += 1;
        } else {
            items.push(candidate.into_item());
        }
        self.persist(&items).await
    }

    /// Raise the quantity of the line with `id` by one.
    ///
    /// An unknown id leaves the cart unchanged; the current state is
    /// persisted either way.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub async fn increment(&self, id: &ProductId) -> Result<(), CartError> {
        let mut items = self.inner.items.write().await;
        if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
            item.quantity += 1;
        }
        self.persist(&items).await
    }

    /// Lower the quantity of the line with `id` by one, stopping at zero.
    ///
    /// The line stays in the cart when its quantity reaches zero. An
    /// unknown id or an already-zero quantity leaves the cart unchanged;
    /// the current state is persisted either way.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub async fn decrement(&self, id: &ProductId) -> Result<(), CartError> {
        let mut items = self.inner.items.write().await;
        if let Some(item) = items
            .iter_mut()
            .find(|item| item.id == *id && item.quantity > 0)
        {
            item.quantity -= 1;
        }
        self.persist(&items).await
    }

    /// Empty the cart and delete its persisted entry.
    ///
    /// # Errors
    ///
    /// Returns an error if deleting the persisted entry fails. The
    /// in-memory cart is emptied either way.
    pub async fn clear(&self) -> Result<(), CartError> {
        let mut items = self.inner.items.write().await;
        items.clear();
        self.inner.changed.send_replace(Vec::new());
        self.inner.storage.remove(CART_PRODUCTS_KEY).await?;
        Ok(())
    }

    /// Snapshot of the current cart lines, in insertion order.
    #[must_use]
    pub async fn items(&self) -> Vec<CartItem> {
        self.inner.items.read().await.clone()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub async fn item_count(&self) -> u32 {
        self.inner
            .items
            .read()
            .await
            .iter()
            .map(|item| item.quantity)
            .sum()
    }

    /// Sum of every line total.
    #[must_use]
    pub async fn subtotal(&self) -> Decimal {
        self.inner
            .items
            .read()
            .await
            .iter()
            .map(CartItem::line_total)
            .sum()
    }

    /// Watch channel carrying every post-mutation snapshot.
    ///
    /// The receiver's current value is the state as of subscription;
    /// awaiting `changed()` observes subsequent mutations.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.inner.changed.subscribe()
    }

    /// Notify subscribers, then write `items` through to storage.
    ///
    /// Called with the items write lock held; subscribers are notified of
    /// the in-memory state even when the storage write then fails.
    async fn persist(&self, items: &[CartItem]) -> Result<(), CartError> {
        self.inner.changed.send_replace(items.to_vec());
        let blob = serde_json::to_string(items)?;
        self.inner.storage.set(CART_PRODUCTS_KEY, &blob).await?;
        Ok(())
    }
}
