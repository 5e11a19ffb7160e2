//! Component framework core
//!
//! - [`callback`]: clonable event handlers carried in props
//! - [`store`]: observable state container (the "setter" side of view state)
//! - [`element`]: the renderable tree views produce

pub mod callback;
pub mod element;
pub mod store;
