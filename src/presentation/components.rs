//! Shared presentational primitives
//!
//! Components here hold no state. They turn a props struct into an
//! [`Element`](crate::core::element::Element) and forward user interaction to
//! the callbacks found in those props.

pub mod button;
pub mod input;

pub use button::{Button, ButtonProps};
pub use input::{Input, InputProps};
