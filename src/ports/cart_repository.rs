//! Cart repository port.
//!
//! Defines the contract for storing Cart aggregates between requests.
//! The shipped adapter keeps carts in memory; idle carts are purged so the
//! store stays bounded. A durable store would be another implementation of
//! this trait.

use async_trait::async_trait;

use crate::domain::cart::Cart;
use crate::domain::foundation::{CartId, DomainError, Timestamp};

/// A change applied to a cart while the repository holds it exclusively.
pub type CartMutation<'a> = Box<dyn FnOnce(&mut Cart) + Send + 'a>;

/// Repository port for Cart aggregate persistence.
///
/// Implementations must ensure:
/// - `modify` applies the mutation and stores the result as one atomic swap,
///   so concurrent requests on the same cart never observe a partial update
/// - Carts are isolated from one another
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Insert or replace a cart.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, cart: &Cart) -> Result<(), DomainError>;

    /// Find a cart by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, DomainError>;

    /// Apply `mutation` to the stored cart and return the updated cart.
    ///
    /// Returns `None` (without running the mutation) if the cart does not exist.
    async fn modify(
        &self,
        id: &CartId,
        mutation: CartMutation<'_>,
    ) -> Result<Option<Cart>, DomainError>;

    /// Remove every cart last updated before `idle_since`.
    ///
    /// Returns the number of carts removed.
    async fn purge_idle(&self, idle_since: &Timestamp) -> Result<usize, DomainError>;

    /// Number of carts currently stored.
    async fn count(&self) -> Result<usize, DomainError>;
}
