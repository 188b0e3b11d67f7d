//! Contact Adapters
//!
//! Implementations of the ContactDelivery port.

mod logging_delivery;
#[cfg(test)]
mod recording_delivery;

pub use logging_delivery::LoggingContactDelivery;
#[cfg(test)]
pub use recording_delivery::RecordingContactDelivery;
