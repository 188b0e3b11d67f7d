//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalogue` - Embedded and file-backed YAML catalogue sources
//! - `checkout` - Checkout stand-in until ordering goes live
//! - `contact` - Contact message delivery
//! - `storage` - Cart storage
//! - `http` - REST API

pub mod catalogue;
pub mod checkout;
pub mod contact;
pub mod http;
pub mod storage;
