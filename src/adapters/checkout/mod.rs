//! Checkout Adapters
//!
//! Implementations of the CheckoutService port.

mod unavailable_checkout;

pub use unavailable_checkout::UnavailableCheckout;
