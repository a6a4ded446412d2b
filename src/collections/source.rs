// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{
    HandlerId, NotifyPropertyChanged, PropertyChanged, PropertyChangedHandler,
};
use crate::domain::error::CollectionError;
use std::cell::{Cell, RefCell};
use std::fmt;

/// Handler list to embed in types that announce property changes.
///
/// ```
/// use navkit::application::port::{HandlerId, NotifyPropertyChanged, PropertyChangedHandler};
/// use navkit::collections::PropertyChangedSource;
/// use std::cell::RefCell;
///
/// #[derive(Default)]
/// struct Track {
///     title: RefCell<String>,
///     changes: PropertyChangedSource,
/// }
///
/// impl Track {
///     fn set_title(&self, title: &str) {
///         *self.title.borrow_mut() = title.to_string();
///         let _ = self.changes.notify("Title");
///     }
/// }
///
/// impl NotifyPropertyChanged for Track {
///     fn add_property_changed(&self, handler: PropertyChangedHandler) -> HandlerId {
///         self.changes.add(handler)
///     }
///
///     fn remove_property_changed(&self, id: HandlerId) {
///         self.changes.remove(id);
///     }
/// }
/// # Track::default().set_title("Intro");
/// ```
#[derive(Default)]
pub struct PropertyChangedSource {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(HandlerId, PropertyChangedHandler)>>,
}

impl PropertyChangedSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler at the end of the invocation list.
    pub fn add(&self, handler: PropertyChangedHandler) -> HandlerId {
        let id = HandlerId::new(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Removes a handler. Unknown ids are ignored.
    pub fn remove(&self, id: HandlerId) {
        self.handlers.borrow_mut().retain(|(handler_id, _)| *handler_id != id);
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Invokes every handler with a change of `property`.
    ///
    /// Handlers may add or remove handlers while being invoked. Added handlers
    /// are first invoked by the next notification, removed handlers are not
    /// invoked again, even later in this one.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error a handler reports, typically
    /// [`CollectionError::InvariantViolation`] from a collection this source
    /// was removed from without being unsubscribed.
    pub fn notify(&self, property: &str) -> Result<(), CollectionError> {
        let change = PropertyChanged::new(property);
        let snapshot: Vec<(HandlerId, PropertyChangedHandler)> =
            self.handlers.borrow().clone();
        for (id, handler) in snapshot {
            if !self.contains(id) {
                continue;
            }
            handler(&change)?;
        }
        Ok(())
    }

    fn contains(&self, id: HandlerId) -> bool {
        self.handlers.borrow().iter().any(|(handler_id, _)| *handler_id == id)
    }
}

impl NotifyPropertyChanged for PropertyChangedSource {
    fn add_property_changed(&self, handler: PropertyChangedHandler) -> HandlerId {
        self.add(handler)
    }

    fn remove_property_changed(&self, id: HandlerId) {
        self.remove(id);
    }
}

impl fmt::Debug for PropertyChangedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyChangedSource")
            .field("handlers", &self.handler_count())
            .finish()
    }
}
