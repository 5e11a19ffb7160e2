//! Widgets that draw element trees into a ratatui buffer.

pub mod element;

pub use element::ElementWidget;
