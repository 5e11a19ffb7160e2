//! Observable state container
//!
//! A [`Store`] owns a model and a list of listeners. Every dispatched message
//! goes through [`Model::update`] and then notifies the listeners, which is how
//! the host learns that a view has to be rendered again.

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::core::callback::Callback;

/// State owned by a view, advanced by messages.
pub trait Model {
    type Message;

    fn update(&mut self, message: Self::Message);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Rc<dyn Fn()>;

struct Inner<M> {
    model: RefCell<M>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<usize>,
}

pub struct Store<M: Model> {
    inner: Rc<Inner<M>>,
}

impl<M: Model> Store<M> {
    pub fn new(model: M) -> Self {
        Self {
            inner: Rc::new(Inner {
                model: RefCell::new(model),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Current model
    pub fn state(&self) -> Ref<'_, M> {
        self.inner.model.borrow()
    }

    pub fn dispatch(&self, message: M::Message) {
        dispatch(&self.inner, message);
    }

    /// Register a listener called after every state transition.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Returns false when the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Setter handle that can be captured by callbacks.
    pub fn dispatcher(&self) -> Dispatcher<M> {
        Dispatcher {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<M: Model + Default> Default for Store<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<M: Model + fmt::Debug> fmt::Debug for Store<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("model", &*self.inner.model.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

fn dispatch<M: Model>(inner: &Inner<M>, message: M::Message) {
    inner.model.borrow_mut().update(message);

    // Listeners may read the model or subscribe again, so neither borrow is held here.
    let listeners: Vec<Listener> = inner
        .listeners
        .borrow()
        .iter()
        .map(|(_, listener)| Rc::clone(listener))
        .collect();
    for listener in listeners {
        listener();
    }
}

/// Weak handle on a [`Store`].
///
/// Dispatching after the store has been dropped (the view was unmounted) is a no-op.
pub struct Dispatcher<M: Model> {
    inner: Weak<Inner<M>>,
}

impl<M: Model> Dispatcher<M> {
    pub fn dispatch(&self, message: M::Message) {
        match self.inner.upgrade() {
            Some(inner) => dispatch(&inner, message),
            None => log::debug!("dropping message for an unmounted store"),
        }
    }

    /// Build a callback that maps its input to a message and dispatches it.
    pub fn callback<IN>(&self, f: impl Fn(IN) -> M::Message + 'static) -> Callback<IN>
    where
        M: 'static,
    {
        let dispatcher = self.clone();
        Callback::from(move |input: IN| dispatcher.dispatch(f(input)))
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl<M: Model> Clone for Dispatcher<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<M: Model> fmt::Debug for Dispatcher<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
