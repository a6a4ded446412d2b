// SPDX-License-Identifier: MPL-2.0
//! Element change-notification port.
//!
//! Elements stored in an observing collection expose a handler pair: the
//! collection adds one handler when the element is inserted and removes it
//! again when the element leaves. Handlers return a `Result` so that a
//! collection can report a notification it should never have received back
//! to the element raising it.

use crate::domain::error::CollectionError;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// PropertyChanged
// =============================================================================

/// Describes a change of one named property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyChanged {
    property: String,
}

impl PropertyChanged {
    #[must_use]
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }

    /// Name of the property that changed.
    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.property
    }
}

impl fmt::Display for PropertyChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property)
    }
}

// =============================================================================
// Handler plumbing
// =============================================================================

/// Callback invoked on every property change of an element.
pub type PropertyChangedHandler = Rc<dyn Fn(&PropertyChanged) -> Result<(), CollectionError>>;

/// Identifies a handler added with [`NotifyPropertyChanged::add_property_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// NotifyPropertyChanged Trait
// =============================================================================

/// Port for elements that announce changes of their properties.
///
/// Implementations must invoke every added handler, in insertion order, each
/// time a property changes, and must stop invoking a handler once it has been
/// removed, even when another handler removed it during the same notification.
/// [`PropertyChangedSource`](crate::collections::PropertyChangedSource)
/// provides a ready-made implementation to embed.
pub trait NotifyPropertyChanged {
    /// Adds a handler and returns the id that removes it again.
    fn add_property_changed(&self, handler: PropertyChangedHandler) -> HandlerId;

    /// Removes a handler. Unknown ids are ignored.
    fn remove_property_changed(&self, id: HandlerId);
}
