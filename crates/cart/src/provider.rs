//! Scoped access to a shared cart handle.
//!
//! UI code that cannot thread a [`CartStore`] parameter through every
//! layer can run inside a cart scope instead: [`with_cart`] installs a
//! handle for the duration of a future, and [`use_cart`] retrieves it
//! from anywhere within that future. The scope is task-local, never
//! process-global, so two tasks can carry different carts.

use std::future::Future;

use crate::store::CartStore;

tokio::task_local! {
    static CURRENT_CART: CartStore;
}

/// Run `fut` with `store` installed as the ambient cart for the task.
pub async fn with_cart<F>(store: CartStore, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_CART.scope(store, fut).await
}

/// Retrieve a handle to the cart installed by the enclosing [`with_cart`].
///
/// # Panics
///
/// Panics when called outside a cart scope. This is a programming error
/// at the call site: wrap the task in [`with_cart`] first, or take a
/// [`CartStore`] parameter and use [`try_use_cart`] where a scope is
/// genuinely optional.
#[must_use]
pub fn use_cart() -> CartStore {
    match CURRENT_CART.try_with(Clone::clone) {
        Ok(store) => store,
        Err(_) => panic!("use_cart must be called within a cart scope; wrap the task in with_cart"),
    }
}

/// Like [`use_cart`], but returns `None` outside a cart scope.
#[must_use]
pub fn try_use_cart() -> Option<CartStore> {
    CURRENT_CART.try_with(Clone::clone).ok()
}
