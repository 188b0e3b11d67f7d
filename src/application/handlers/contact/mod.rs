//! Contact and store information handlers.

mod get_store_info;
mod submit_contact;

pub use get_store_info::{GetStoreInfoHandler, OpeningHours, StoreInfo, StoreValue};
pub use submit_contact::{ContactReceipt, SubmitContactCommand, SubmitContactHandler};
