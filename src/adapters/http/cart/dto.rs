//! HTTP DTOs for cart endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::catalogue::dto::ProductResponse;
use crate::application::handlers::cart::CartCommandResult;
use crate::domain::cart::{Cart, CartLineItem, LineChange};
use crate::ports::OrderConfirmation;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    /// Defaults to 1.
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuantityRequest {
    /// Zero or negative removes the line.
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawerRequest {
    pub open: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CartItemResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    pub subtotal: u64,
}

impl From<&CartLineItem> for CartItemResponse {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product: ProductResponse::from(&item.product),
            quantity: item.quantity,
            subtotal: item.subtotal(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartItemResponse>,
    pub total_items: u64,
    pub total_price: u64,
    pub is_open: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id().to_string(),
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            is_open: cart.is_open(),
            created_at: cart.created_at().to_rfc3339(),
            updated_at: cart.updated_at().to_rfc3339(),
        }
    }
}

/// What a line command did to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LineChangeResponse {
    Added { quantity: u32 },
    Updated { quantity: u32 },
    Removed,
    Unchanged,
}

impl From<LineChange> for LineChangeResponse {
    fn from(change: LineChange) -> Self {
        match change {
            LineChange::Added { quantity } => Self::Added { quantity },
            LineChange::Updated { quantity } => Self::Updated { quantity },
            LineChange::Removed => Self::Removed,
            LineChange::Unchanged => Self::Unchanged,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartCommandResponse {
    pub cart: CartResponse,
    pub change: LineChangeResponse,
}

impl From<CartCommandResult> for CartCommandResponse {
    fn from(result: CartCommandResult) -> Self {
        Self {
            cart: CartResponse::from(&result.cart),
            change: result.change.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub order_reference: String,
    pub total_items: u64,
    pub total_price: u64,
    pub placed_at: String,
}

impl From<OrderConfirmation> for CheckoutResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        Self {
            order_reference: confirmation.order_reference,
            total_items: confirmation.total_items,
            total_price: confirmation.total_price,
            placed_at: confirmation.placed_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_change_is_tagged() {
        let json = serde_json::to_value(LineChangeResponse::Added { quantity: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "added", "quantity": 2}));

        let json = serde_json::to_value(LineChangeResponse::Unchanged).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "unchanged"}));
    }

    #[test]
    fn quantity_is_optional_when_adding() {
        let req: AddItemRequest =
            serde_json::from_str(r#"{"product_id": "peony-blush"}"#).unwrap();
        assert_eq!(req.quantity, None);
    }
}
