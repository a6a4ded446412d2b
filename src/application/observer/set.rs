// SPDX-License-Identifier: MPL-2.0
use super::Subscription;
use crate::application::port::Observer;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

enum Delivery<T> {
    Next(T),
    Completed,
}

struct Slot<T> {
    id: u64,
    active: Cell<bool>,
    observer: RefCell<Box<dyn Observer<T>>>,
}

impl<T> Slot<T> {
    fn deliver(&self, value: &T) {
        if self.active.get() {
            self.observer.borrow_mut().on_next(value);
        }
    }
}

struct Shared<T> {
    next_id: Cell<u64>,
    slots: RefCell<Vec<Rc<Slot<T>>>>,
    pending: RefCell<VecDeque<Delivery<T>>>,
    delivering: Cell<bool>,
}

/// Clears the delivering flag when a broadcast ends. A broadcast ended by a
/// panic also discards the values still queued behind it.
struct DeliveryGuard<'a, T>(&'a Shared<T>);

impl<T> Drop for DeliveryGuard<'_, T> {
    fn drop(&mut self) {
        self.0.delivering.set(false);
        if std::thread::panicking() {
            if let Ok(mut pending) = self.0.pending.try_borrow_mut() {
                pending.clear();
            }
        }
    }
}

impl<T> Shared<T> {
    fn remove(&self, id: u64) {
        self.slots.borrow_mut().retain(|slot| {
            if slot.id == id {
                slot.active.set(false);
                false
            } else {
                true
            }
        });
    }

    fn drain(&self) {
        if self.delivering.replace(true) {
            return;
        }
        let _guard = DeliveryGuard(self);

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(delivery) = next else { break };

            match delivery {
                Delivery::Next(value) => {
                    // Observers added by a callback are not part of this snapshot,
                    // observers removed by a callback are skipped via `active`.
                    let snapshot: Vec<Rc<Slot<T>>> = self.slots.borrow().clone();
                    for slot in snapshot {
                        slot.deliver(&value);
                    }
                }
                Delivery::Completed => {
                    let slots = std::mem::take(&mut *self.slots.borrow_mut());
                    for slot in slots {
                        if slot.active.replace(false) {
                            slot.observer.borrow_mut().on_completed();
                        }
                    }
                }
            }
        }
    }
}

/// Ordered set of observers receiving values of type `T`.
pub struct ObserverSet<T: 'static> {
    shared: Rc<Shared<T>>,
}

impl<T: 'static> ObserverSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                next_id: Cell::new(0),
                slots: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
        }
    }

    /// Adds an observer at the end of the delivery order.
    pub fn subscribe(&self, observer: impl Observer<T> + 'static) -> Subscription {
        self.subscribe_with(observer, None)
    }

    /// Adds an observer and, if `initial` is present, delivers it to that
    /// observer alone before returning.
    pub fn subscribe_with(
        &self,
        observer: impl Observer<T> + 'static,
        initial: Option<&T>,
    ) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id.wrapping_add(1));

        let slot = Rc::new(Slot {
            id,
            active: Cell::new(true),
            observer: RefCell::new(Box::new(observer)),
        });
        self.shared.slots.borrow_mut().push(Rc::clone(&slot));

        let shared = Rc::downgrade(&self.shared);
        let subscription = Subscription::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.remove(id);
            }
        });

        if let Some(value) = initial {
            if self.shared.delivering.get() {
                slot.deliver(value);
            } else {
                {
                    self.shared.delivering.set(true);
                    let _guard = DeliveryGuard(&*self.shared);
                    slot.deliver(value);
                }
                // Anything published by the initial callback
                self.shared.drain();
            }
        }

        subscription
    }

    /// Delivers `value` to every observer in subscription order.
    ///
    /// Called from inside an observer callback, the value is queued and
    /// delivered once the running broadcast has finished.
    pub fn notify(&self, value: T) {
        self.shared
            .pending
            .borrow_mut()
            .push_back(Delivery::Next(value));
        self.shared.drain();
    }

    /// Sends `on_completed` to every observer and removes them all.
    pub fn complete(&self) {
        self.shared
            .pending
            .borrow_mut()
            .push_back(Delivery::Completed);
        self.shared.drain();
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.slots.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for ObserverSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.len())
            .field("delivering", &self.shared.delivering.get())
            .finish()
    }
}
