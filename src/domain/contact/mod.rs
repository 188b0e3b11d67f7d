//! Contact domain module.

mod errors;
mod message;

pub use errors::ContactError;
pub use message::{ContactMessage, MAX_MESSAGE_LENGTH};
