//! Integration layer
//!
//! Wires views, keybindings and the terminal together.

pub mod host;

pub use host::Host;
