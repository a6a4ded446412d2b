// SPDX-License-Identifier: MPL-2.0
//! Destination materializer port definition.
//!
//! A navigation stack only knows keys and locators. Turning a locator into
//! something presentable, and getting rid of it again, is delegated to a
//! [`DestinationMaterializer`]. The two deployment flavors differ only here:
//!
//! - **Page flavor**: a popped page is simply dropped ([`PageFactory`])
//! - **Owned window flavor**: a popped window is closed, and a window the user
//!   closes pops itself from the stack ([`WindowFactory`], [`OwnedWindow`])
//!
//! # Design Notes
//!
//! - Materialization is infallible. A materializer that cannot resolve a
//!   locator returns its own placeholder destination.
//! - Handles are `Clone` because observers receive the current top by value
//!   while the stack keeps its own copy.

use crate::domain::navigation::{EntryId, Locator};
use std::fmt;
use std::rc::Weak;

// =============================================================================
// CloseHook
// =============================================================================

/// Receiver side of a [`CloseHook`], implemented by navigation stacks.
pub(crate) trait EntryClosed {
    fn entry_closed(&self, entry: EntryId);
}

/// Callback handed to a destination so it can report that it was closed.
///
/// Invoking [`CloseHook::notify_closed`] pops the stack only if the entry
/// this hook was created for is still the top entry. Hooks outliving their
/// stack do nothing.
#[derive(Clone)]
pub struct CloseHook {
    target: Weak<dyn EntryClosed>,
    entry: EntryId,
}

impl CloseHook {
    pub(crate) fn new(target: Weak<dyn EntryClosed>, entry: EntryId) -> Self {
        Self { target, entry }
    }

    /// The stack entry this hook belongs to.
    #[must_use]
    pub fn entry(&self) -> EntryId {
        self.entry
    }

    /// Reports that the destination has been closed.
    pub fn notify_closed(&self) {
        if let Some(target) = self.target.upgrade() {
            target.entry_closed(self.entry);
        }
    }
}

impl fmt::Debug for CloseHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseHook")
            .field("entry", &self.entry)
            .field("attached", &(self.target.strong_count() > 0))
            .finish()
    }
}

// =============================================================================
// DestinationMaterializer Trait
// =============================================================================

/// Strategy that turns locators into live destinations and disposes of them.
///
/// # Lifecycle
///
/// 1. `materialize()` is called once per successful navigation
/// 2. `watch_close()` is called right after the new entry is pushed
/// 3. `release()` is called exactly once when the entry is popped, or when
///    the stack is dropped with the entry still on it
pub trait DestinationMaterializer: 'static {
    /// Live destination stored on the stack and published to observers.
    type Handle: Clone + 'static;

    /// Optional context attached to a materialized destination.
    type Parameter: 'static;

    /// Produces a destination for `locator`, attaching `parameter` as its
    /// context when present.
    fn materialize(&mut self, locator: &Locator, parameter: Option<Self::Parameter>)
        -> Self::Handle;

    /// Takes back ownership of a destination that left the stack.
    fn release(&mut self, handle: Self::Handle);

    /// Lets the destination report its own closure. The default ignores the
    /// hook, which is what the page flavor wants.
    fn watch_close(&mut self, handle: &Self::Handle, hook: CloseHook) {
        let _ = (handle, hook);
    }
}

// =============================================================================
// Flavor collaborators
// =============================================================================

/// Loads in-process pages for the page flavor.
pub trait PageFactory: 'static {
    type Page: Clone + 'static;
    type Parameter: 'static;

    /// Loads the page described by `locator`.
    fn load(&mut self, locator: &Locator, parameter: Option<Self::Parameter>) -> Self::Page;
}

/// A child window owned by the main window.
pub trait OwnedWindow: Clone + 'static {
    /// Closes the window. Closing an already closed window must be harmless.
    fn close(&self);

    /// Registers `hook` to be invoked once the window has closed.
    fn on_closed(&self, hook: CloseHook);
}

/// Creates owned child windows for the window flavor.
pub trait WindowFactory: 'static {
    type Window: OwnedWindow;
    type Parameter: 'static;

    /// Creates and shows the window described by `locator`.
    fn create(&mut self, locator: &Locator, parameter: Option<Self::Parameter>) -> Self::Window;
}
