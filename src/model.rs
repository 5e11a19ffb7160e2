//! View state
//!
//! Each model follows the same shape: a `Message` enum and an `update` method
//! that advances the state. Views keep their model inside a
//! [`Store`](crate::core::store::Store).

pub mod event_log;
pub mod field;

pub use event_log::{EventLog, EventRecord};
pub use field::Field;
