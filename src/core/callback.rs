use std::fmt;
use std::rc::Rc;

/// A shared, clonable event handler passed down to primitives as a prop.
///
/// Cloning is cheap (reference counted). Two callbacks compare equal only when
/// they wrap the same closure.
pub struct Callback<IN> {
    cb: Rc<dyn Fn(IN)>,
}

impl<IN> Callback<IN> {
    pub fn new(f: impl Fn(IN) + 'static) -> Self {
        Self { cb: Rc::new(f) }
    }

    /// Invoke the handler synchronously
    pub fn emit(&self, value: IN) {
        (self.cb)(value);
    }
}

impl<IN, F: Fn(IN) + 'static> From<F> for Callback<IN> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<IN> Clone for Callback<IN> {
    fn clone(&self) -> Self {
        Self {
            cb: Rc::clone(&self.cb),
        }
    }
}

impl<IN> PartialEq for Callback<IN> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cb, &other.cb)
    }
}

impl<IN> fmt::Debug for Callback<IN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(_)")
    }
}
