//! Storage Adapters
//!
//! Implementations of the CartRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryCartRepository** - Stores carts in memory for the life of the process

mod in_memory_cart_repository;

pub use in_memory_cart_repository::InMemoryCartRepository;
