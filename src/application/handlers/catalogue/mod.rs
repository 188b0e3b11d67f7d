//! Catalogue query handlers.

mod browse_shop;
mod get_category_page;
mod get_home;
mod get_product_detail;
mod list_catalogue;

pub use browse_shop::{BrowseShopHandler, BrowseShopQuery, ShopListing};
pub use get_category_page::{CategoryPage, GetCategoryPageHandler, GetCategoryPageQuery};
pub use get_home::{GetHomeHandler, HomePage};
pub use get_product_detail::{GetProductDetailHandler, GetProductDetailQuery, ProductDetail};
pub use list_catalogue::{ListCategoriesHandler, ListProductsHandler};
