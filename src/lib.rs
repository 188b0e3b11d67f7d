//! Flandeur - Storefront backend for a luxury flower shop.
//!
//! Serves the product catalogue (categories, filtered shop listing, product
//! pages), per-session shopping carts and the contact form over a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
