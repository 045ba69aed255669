use std::cell::RefCell;
use std::rc::Rc;

/// Shared home for a callback that re-arms itself every frame.
///
/// The callback holds a handle to its own slot, so whoever ends the loop must
/// `release` it or the pair is never freed.
pub struct CallbackSlot<C>(Rc<RefCell<Option<C>>>);

impl<C> Clone for CallbackSlot<C> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<C> CallbackSlot<C> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    pub fn set(&self, cb: C) {
        *self.0.borrow_mut() = Some(cb);
    }

    /// Run `f` against the armed callback, if any.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        self.0.borrow().as_ref().map(f)
    }

    /// Empty the slot, handing the callback back to be dropped.
    pub fn release(&self) -> Option<C> {
        self.0.borrow_mut().take()
    }
}
