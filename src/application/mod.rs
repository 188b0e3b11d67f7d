//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::cart::{
    AddToCartCommand, AddToCartHandler, CartCommandResult, CheckoutCartCommand,
    CheckoutCartHandler, ClearCartCommand, ClearCartHandler, CreateCartHandler, GetCartHandler,
    GetCartQuery, RemoveFromCartCommand, RemoveFromCartHandler, SetDrawerCommand,
    SetDrawerHandler, UpdateQuantityCommand, UpdateQuantityHandler,
};
pub use handlers::catalogue::{
    BrowseShopHandler, BrowseShopQuery, CategoryPage, GetCategoryPageHandler,
    GetCategoryPageQuery, GetHomeHandler, GetProductDetailHandler, GetProductDetailQuery,
    HomePage, ListCategoriesHandler, ListProductsHandler, ProductDetail, ShopListing,
};
pub use handlers::contact::{
    ContactReceipt, GetStoreInfoHandler, StoreInfo, SubmitContactCommand, SubmitContactHandler,
};
