// SPDX-License-Identifier: MPL-2.0
//! Navigation stack state machine.
//!
//! The stack keeps a registry of named destinations and a last-in-first-out
//! list of the destinations that were navigated to. Every push and pop is
//! broadcast to observers as the new top (or `None` once the stack is empty).
//!
//! # Re-entrancy
//!
//! Observers and materializers may call back into the stack. Such calls are
//! queued and run after the current transition has been broadcast to every
//! observer, so no observer ever sees a half-applied transition.

use super::registry::DestinationRegistry;
use crate::application::observer::{ObserverSet, Subscription};
use crate::application::port::materializer::EntryClosed;
use crate::application::port::{CloseHook, DestinationMaterializer, Observer};
use crate::domain::navigation::{EntryId, Locator, PageKey};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

struct Entry<H> {
    id: EntryId,
    key: PageKey,
    handle: H,
}

enum Command<P> {
    Navigate { key: PageKey, parameter: Option<P> },
    Back,
    Closed(EntryId),
}

/// Clears the dispatching flag once the command queue is drained. Commands
/// left behind by a panicking observer are dropped with it.
struct DispatchGuard<'a, P> {
    dispatching: &'a Cell<bool>,
    pending: &'a RefCell<VecDeque<Command<P>>>,
}

impl<P> Drop for DispatchGuard<'_, P> {
    fn drop(&mut self) {
        self.dispatching.set(false);
        if std::thread::panicking() {
            if let Ok(mut pending) = self.pending.try_borrow_mut() {
                pending.clear();
            }
        }
    }
}

struct StackInner<M: DestinationMaterializer> {
    registry: DestinationRegistry,
    materializer: RefCell<M>,
    entries: RefCell<Vec<Entry<M::Handle>>>,
    next_entry: Cell<EntryId>,
    observers: ObserverSet<Option<M::Handle>>,
    pending: RefCell<VecDeque<Command<M::Parameter>>>,
    dispatching: Cell<bool>,
    weak_self: Weak<StackInner<M>>,
}

impl<M: DestinationMaterializer> StackInner<M> {
    fn dispatch(&self, command: Command<M::Parameter>) {
        self.pending.borrow_mut().push_back(command);
        if self.dispatching.replace(true) {
            return;
        }
        let _guard = DispatchGuard {
            dispatching: &self.dispatching,
            pending: &self.pending,
        };

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(command) = next else { break };
            match command {
                Command::Navigate { key, parameter } => self.push(key, parameter),
                Command::Back => self.pop(),
                Command::Closed(entry) => self.pop_if_top(entry),
            }
        }
    }

    fn push(&self, key: PageKey, parameter: Option<M::Parameter>) {
        let Some(locator) = self.registry.locator(key.as_str()) else {
            log::debug!("Ignoring navigation to unregistered page '{key}'");
            return;
        };

        let id = self.next_entry.get();
        self.next_entry.set(id.next());

        let handle = self
            .materializer
            .borrow_mut()
            .materialize(&locator, parameter);
        self.entries.borrow_mut().push(Entry {
            id,
            key,
            handle: handle.clone(),
        });

        let target: Weak<dyn EntryClosed> = self.weak_self.clone();
        self.materializer
            .borrow_mut()
            .watch_close(&handle, CloseHook::new(target, id));

        self.broadcast_top();
    }

    fn pop(&self) {
        let popped = self.entries.borrow_mut().pop();
        let Some(entry) = popped else {
            return;
        };
        self.materializer.borrow_mut().release(entry.handle);
        self.broadcast_top();
    }

    fn pop_if_top(&self, entry: EntryId) {
        let is_top = self.entries.borrow().last().is_some_and(|top| top.id == entry);
        if is_top {
            self.pop();
        } else {
            log::debug!(
                "Ignoring close of entry {} which is no longer on top",
                entry.value()
            );
        }
    }

    fn top(&self) -> Option<M::Handle> {
        self.entries.borrow().last().map(|entry| entry.handle.clone())
    }

    fn broadcast_top(&self) {
        self.observers.notify(self.top());
    }
}

impl<M: DestinationMaterializer> EntryClosed for StackInner<M> {
    fn entry_closed(&self, entry: EntryId) {
        self.dispatch(Command::Closed(entry));
    }
}

impl<M: DestinationMaterializer> Drop for StackInner<M> {
    fn drop(&mut self) {
        let entries = std::mem::take(self.entries.get_mut());
        let materializer = self.materializer.get_mut();
        for entry in entries.into_iter().rev() {
            materializer.release(entry.handle);
        }
    }
}

/// A navigation stack driven by a [`DestinationMaterializer`].
///
/// Cloning the stack yields another handle to the same state.
///
/// # Example
///
/// ```
/// use navkit::application::navigation::{NavigationStack, PageFlavor};
/// use navkit::application::port::PageFactory;
/// use navkit::domain::navigation::Locator;
///
/// #[derive(Default)]
/// struct Pages;
///
/// impl PageFactory for Pages {
///     type Page = String;
///     type Parameter = ();
///
///     fn load(&mut self, locator: &Locator, _parameter: Option<()>) -> String {
///         locator.to_string()
///     }
/// }
///
/// let stack = NavigationStack::new(PageFlavor::new(Pages));
/// stack.register("first", "/View/FirstView");
/// stack.navigate_to("first");
/// assert_eq!(stack.current_page_key().as_ref().map(|k| k.as_str()), Some("first"));
///
/// stack.go_back();
/// assert!(stack.current_page_key().is_none());
/// ```
pub struct NavigationStack<M: DestinationMaterializer> {
    inner: Rc<StackInner<M>>,
}

impl<M: DestinationMaterializer> NavigationStack<M> {
    /// Creates an empty stack with its own registry.
    #[must_use]
    pub fn new(materializer: M) -> Self {
        Self::with_registry(materializer, DestinationRegistry::new())
    }

    /// Creates an empty stack that resolves keys through `registry`.
    #[must_use]
    pub fn with_registry(materializer: M, registry: DestinationRegistry) -> Self {
        let inner = Rc::new_cyclic(|weak_self| StackInner {
            registry,
            materializer: RefCell::new(materializer),
            entries: RefCell::new(Vec::new()),
            next_entry: Cell::new(EntryId::FIRST),
            observers: ObserverSet::new(),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            weak_self: weak_self.clone(),
        });
        Self { inner }
    }

    /// Handle to the registry, usable from other threads.
    #[must_use]
    pub fn registry(&self) -> DestinationRegistry {
        self.inner.registry.clone()
    }

    /// Registers `locator` under `key`, overwriting any previous locator.
    pub fn register(&self, key: impl Into<PageKey>, locator: impl Into<Locator>) {
        self.inner.registry.register(key, locator);
    }

    /// Navigates to `key` without a parameter.
    pub fn navigate_to(&self, key: impl Into<PageKey>) {
        self.inner.dispatch(Command::Navigate {
            key: key.into(),
            parameter: None,
        });
    }

    /// Navigates to `key`, attaching `parameter` to the new destination.
    ///
    /// Unregistered keys are ignored: the stack is left untouched and no
    /// observer is notified.
    pub fn navigate_to_with(&self, key: impl Into<PageKey>, parameter: M::Parameter) {
        self.inner.dispatch(Command::Navigate {
            key: key.into(),
            parameter: Some(parameter),
        });
    }

    /// Pops the current destination. Does nothing on an empty stack.
    pub fn go_back(&self) {
        self.inner.dispatch(Command::Back);
    }

    /// Key of the current destination, `None` when the stack is empty.
    #[must_use]
    pub fn current_page_key(&self) -> Option<PageKey> {
        self.inner
            .entries
            .borrow()
            .last()
            .map(|entry| entry.key.clone())
    }

    /// The current destination.
    #[must_use]
    pub fn top(&self) -> Option<M::Handle> {
        self.inner.top()
    }

    /// Number of destinations on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.depth() == 0
    }

    /// Keys from bottom to top.
    #[must_use]
    pub fn history(&self) -> Vec<PageKey> {
        self.inner
            .entries
            .borrow()
            .iter()
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Subscribes to top-of-stack changes.
    ///
    /// If the stack is not empty, `observer` receives the current top before
    /// this call returns.
    pub fn subscribe(&self, observer: impl Observer<Option<M::Handle>> + 'static) -> Subscription {
        let initial = self.inner.top().map(Some);
        self.inner.observers.subscribe_with(observer, initial.as_ref())
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Sends `on_completed` to every observer and drops them.
    pub fn complete(&self) {
        self.inner.observers.complete();
    }
}

impl<M: DestinationMaterializer> Clone for NavigationStack<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M: DestinationMaterializer> fmt::Debug for NavigationStack<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationStack")
            .field("history", &self.history())
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}
