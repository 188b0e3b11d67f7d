//! Cart aggregate.
//!
//! A cart holds the line items picked during one browsing session together
//! with the visibility flag of the cart drawer. Totals are derived on every
//! read and never stored.

use serde::{Deserialize, Serialize};

use crate::domain::catalogue::Product;
use crate::domain::foundation::{CartId, ProductId, Timestamp};

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Snapshot of the catalogue product.
    pub product: Product,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLineItem {
    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> u64 {
        self.product.price.times(self.quantity)
    }
}

/// What a cart operation did to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Added { quantity: u32 },
    Updated { quantity: u32 },
    Removed,
    Unchanged,
}

/// Cart aggregate.
///
/// # Invariants
///
/// - At most one line per product id
/// - Every line has `quantity >= 1`
/// - Lines keep the order in which products were first added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    items: Vec<CartLineItem>,
    is_open: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new(id: CartId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            items: Vec::new(),
            is_open: false,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CartId {
        &self.id
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart drawer is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the line for `product_id`, if any.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Quantity the line for `product_id` would hold after adding `quantity`.
    ///
    /// `None` when the sum does not fit in a `u32`.
    pub fn quantity_after_add(&self, product_id: &ProductId, quantity: u32) -> Option<u32> {
        match self.line(product_id) {
            Some(line) => line.quantity.checked_add(quantity),
            None => Some(quantity),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add `quantity` units of `product`.
    ///
    /// Increments the existing line when the product is already in the cart.
    /// A zero quantity leaves the cart untouched. The line saturates at
    /// `u32::MAX`; callers that must not lose units check
    /// [`Cart::quantity_after_add`] first.
    pub fn add(&mut self, product: &Product, quantity: u32) -> LineChange {
        if quantity == 0 {
            return LineChange::Unchanged;
        }

        let change = match self.position(&product.id) {
            Some(pos) => {
                let line = &mut self.items[pos];
                line.quantity = line.quantity.saturating_add(quantity);
                LineChange::Updated {
                    quantity: line.quantity,
                }
            }
            None => {
                self.items.push(CartLineItem {
                    product: product.clone(),
                    quantity,
                });
                LineChange::Added { quantity }
            }
        };

        self.touch();
        change
    }

    /// Set the quantity of a line. Zero or below removes it.
    ///
    /// Unknown product ids are ignored. Values above `u32::MAX` saturate.
    pub fn update_quantity(&mut self, product_id: &ProductId, new_quantity: i64) -> LineChange {
        if new_quantity <= 0 {
            return self.remove(product_id);
        }

        let Some(pos) = self.position(product_id) else {
            return LineChange::Unchanged;
        };

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        self.items[pos].quantity = quantity;
        self.touch();
        LineChange::Updated { quantity }
    }

    /// Remove the line for `product_id`, if present.
    pub fn remove(&mut self, product_id: &ProductId) -> LineChange {
        match self.position(product_id) {
            Some(pos) => {
                self.items.remove(pos);
                self.touch();
                LineChange::Removed
            }
            None => LineChange::Unchanged,
        }
    }

    /// Empty the cart, returning the number of lines dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.items.len();
        if dropped > 0 {
            self.items.clear();
            self.touch();
        }
        dropped
    }

    /// Take the lines of a placed order out of the cart.
    ///
    /// Each ordered line lowers the matching line by the ordered quantity,
    /// so anything added after the order snapshot stays in the cart.
    pub fn deduct_ordered(&mut self, ordered: &[CartLineItem]) {
        for line in ordered {
            let Some(pos) = self.position(&line.product.id) else {
                continue;
            };
            let remaining = self.items[pos].quantity.saturating_sub(line.quantity);
            if remaining == 0 {
                self.items.remove(pos);
            } else {
                self.items[pos].quantity = remaining;
            }
        }
        self.touch();
    }

    /// Show or hide the cart drawer.
    pub fn set_open(&mut self, open: bool) {
        if self.is_open != open {
            self.is_open = open;
            self.touch();
        }
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| &item.product.id == product_id)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
