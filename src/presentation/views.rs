//! Top-level views
//!
//! A view owns a [`Store`](crate::core::store::Store) for its local state and
//! builds a fresh element tree from it on every render. Views take no
//! arguments; the host mounts them with `Default`.

use crate::core::{element::Element, store::SubscriptionId};

pub mod analytics;
pub mod dashboard;

pub use analytics::Analytics;
pub use dashboard::Dashboard;

pub trait View {
    fn name(&self) -> &'static str;

    fn render(&self) -> Element;

    /// Register a listener called after each state transition of this view.
    fn subscribe(&self, listener: Box<dyn Fn()>) -> SubscriptionId;
}
