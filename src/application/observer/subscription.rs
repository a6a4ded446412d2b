// SPDX-License-Identifier: MPL-2.0
use std::cell::RefCell;
use std::fmt;

/// Token returned by every `subscribe` call.
///
/// [`Subscription::unsubscribe`] removes exactly the observer it was created
/// for; calling it again does nothing. Dropping the token leaves the observer
/// subscribed.
#[must_use = "keep the subscription to be able to unsubscribe later"]
pub struct Subscription {
    dispose: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    pub(crate) fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: RefCell::new(Some(Box::new(dispose))),
        }
    }

    /// A token that is already disposed.
    pub fn empty() -> Self {
        Self {
            dispose: RefCell::new(None),
        }
    }

    /// Removes the observer. Idempotent.
    pub fn unsubscribe(&self) {
        let dispose = self.dispose.borrow_mut().take();
        if let Some(dispose) = dispose {
            dispose();
        }
    }

    /// Returns `true` until [`Subscription::unsubscribe`] has been called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.dispose.borrow().is_some()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
