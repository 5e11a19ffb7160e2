//! # Trackboard
//!
//! A small terminal component kit built on ratatui, with two views that use it.
//!
//! ## Architecture Overview
//!
//! - **Components** (`presentation::components`): stateless primitives,
//!   `Button` and a controlled `Input`, configured through props structs
//! - **Views** (`presentation::views`): `Analytics` and `Dashboard`, each owning
//!   its state in a [`Store`](crate::core::store::Store)
//! - **Model** (`model`): view state advanced by messages
//! - **Host** (`integration::host`): subscribes to every store and renders again
//!   after each state transition
//!
//! ## Example Usage
//!
//! ```rust
//! use trackboard::core::element::Interactive;
//! use trackboard::presentation::{components::Button, views::Analytics};
//!
//! let view = Analytics::new();
//! assert!(view.render().to_string().contains("Events: 0"));
//!
//! if let [Interactive::Button { on_activate }] = view.render().interactives().as_slice() {
//!     Button::activate(on_activate.as_ref());
//! }
//! assert!(view.render().to_string().contains("Events: 1"));
//! ```

pub mod action;
pub mod core;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use action::Action;
pub use integration::Host;
pub use presentation::views::{Analytics, Dashboard, View};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
