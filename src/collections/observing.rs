// SPDX-License-Identifier: MPL-2.0
//! Collection that re-publishes the property changes of its elements.
//!
//! Every element is subscribed to while it is in the collection and
//! unsubscribed from as soon as it leaves. A change raised by an element is
//! re-published together with the element's index at the moment the change
//! is handled, so earlier insertions and removals are always accounted for.

use crate::application::observer::{ObserverSet, Subscription};
use crate::application::port::{
    HandlerId, NotifyPropertyChanged, Observer, PropertyChanged, PropertyChangedHandler,
};
use crate::domain::error::CollectionError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

// =============================================================================
// Events
// =============================================================================

/// A property change of the element at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPropertyChanged {
    pub index: usize,
    pub change: PropertyChanged,
}

/// A structural change of the collection.
pub enum CollectionChange<T> {
    Added { index: usize, item: Rc<T> },
    Removed { index: usize, item: Rc<T> },
    Replaced { index: usize, old: Rc<T>, new: Rc<T> },
    /// The collection was cleared.
    Reset,
}

impl<T> Clone for CollectionChange<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Added { index, item } => Self::Added {
                index: *index,
                item: Rc::clone(item),
            },
            Self::Removed { index, item } => Self::Removed {
                index: *index,
                item: Rc::clone(item),
            },
            Self::Replaced { index, old, new } => Self::Replaced {
                index: *index,
                old: Rc::clone(old),
                new: Rc::clone(new),
            },
            Self::Reset => Self::Reset,
        }
    }
}

impl<T> fmt::Debug for CollectionChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { index, .. } => f.debug_struct("Added").field("index", index).finish(),
            Self::Removed { index, .. } => f.debug_struct("Removed").field("index", index).finish(),
            Self::Replaced { index, .. } => {
                f.debug_struct("Replaced").field("index", index).finish()
            }
            Self::Reset => f.write_str("Reset"),
        }
    }
}

// =============================================================================
// Inner state
// =============================================================================

/// One subscription, shared by every occurrence of the same element.
struct Attached<T> {
    element: Weak<T>,
    handler: HandlerId,
    occurrences: usize,
}

struct Inner<T: NotifyPropertyChanged + 'static> {
    items: RefCell<Vec<Rc<T>>>,
    attached: RefCell<HashMap<*const T, Attached<T>>>,
    item_changes: ObserverSet<ItemPropertyChanged>,
    collection_changes: ObserverSet<CollectionChange<T>>,
}

impl<T: NotifyPropertyChanged + 'static> Inner<T> {
    fn attach(self: &Rc<Self>, item: &Rc<T>) {
        let key = Rc::as_ptr(item);
        if let Some(attached) = self.attached.borrow_mut().get_mut(&key) {
            attached.occurrences += 1;
            return;
        }

        let collection = Rc::downgrade(self);
        let handler: PropertyChangedHandler = Rc::new(move |change: &PropertyChanged| {
            match collection.upgrade() {
                Some(collection) => collection.item_property_changed(key, change),
                None => Ok(()),
            }
        });
        let handler = item.add_property_changed(handler);
        self.attached.borrow_mut().insert(
            key,
            Attached {
                element: Rc::downgrade(item),
                handler,
                occurrences: 1,
            },
        );
    }

    fn detach(&self, item: &Rc<T>) {
        if let Some(handler) = self.release_occurrence(Rc::as_ptr(item)) {
            item.remove_property_changed(handler);
        }
    }

    /// Drops one occurrence, returning the handler once none is left.
    fn release_occurrence(&self, key: *const T) -> Option<HandlerId> {
        let mut attached = self.attached.borrow_mut();
        let entry = attached.get_mut(&key)?;
        entry.occurrences -= 1;
        if entry.occurrences > 0 {
            return None;
        }
        attached.remove(&key).map(|entry| entry.handler)
    }

    fn item_property_changed(
        &self,
        sender: *const T,
        change: &PropertyChanged,
    ) -> Result<(), CollectionError> {
        let index = self
            .items
            .borrow()
            .iter()
            .position(|item| std::ptr::eq(Rc::as_ptr(item), sender));

        let Some(index) = index else {
            log::error!(
                "Property '{}' changed on an element that left the collection",
                change.property_name()
            );
            return Err(CollectionError::InvariantViolation {
                property: change.property_name().to_string(),
            });
        };

        self.item_changes.notify(ItemPropertyChanged {
            index,
            change: change.clone(),
        });
        Ok(())
    }
}

impl<T: NotifyPropertyChanged + 'static> Drop for Inner<T> {
    fn drop(&mut self) {
        for (_, attached) in self.attached.get_mut().drain() {
            if let Some(element) = attached.element.upgrade() {
                element.remove_property_changed(attached.handler);
            }
        }
    }
}

// =============================================================================
// ObservingCollection
// =============================================================================

/// Ordered collection of change-notifying elements.
///
/// Elements are identified by pointer: inserting the same `Rc` twice keeps a
/// single subscription, which is released with the last occurrence. Cloning
/// the collection yields another handle to the same elements.
pub struct ObservingCollection<T: NotifyPropertyChanged + 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: NotifyPropertyChanged + 'static> ObservingCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                items: RefCell::new(Vec::new()),
                attached: RefCell::new(HashMap::new()),
                item_changes: ObserverSet::new(),
                collection_changes: ObserverSet::new(),
            }),
        }
    }

    /// Builds a collection holding `items`, subscribing to each.
    pub fn from_items(items: impl IntoIterator<Item = Rc<T>>) -> Self {
        let collection = Self::new();
        for item in items {
            collection.inner.attach(&item);
            collection.inner.items.borrow_mut().push(item);
        }
        collection
    }

    /// Appends `item`.
    pub fn push(&self, item: Rc<T>) {
        let index = self.len();
        self.insert(index, item);
    }

    /// Inserts `item` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&self, index: usize, item: Rc<T>) {
        let len = self.len();
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        self.inner.attach(&item);
        self.inner.items.borrow_mut().insert(index, Rc::clone(&item));
        self.inner
            .collection_changes
            .notify(CollectionChange::Added { index, item });
    }

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    pub fn remove_at(&self, index: usize) -> Option<Rc<T>> {
        let item = {
            let mut items = self.inner.items.borrow_mut();
            if index >= items.len() {
                return None;
            }
            items.remove(index)
        };
        self.inner.detach(&item);
        self.inner.collection_changes.notify(CollectionChange::Removed {
            index,
            item: Rc::clone(&item),
        });
        Some(item)
    }

    /// Removes the first occurrence of `item`. Returns `false` if absent.
    pub fn remove_item(&self, item: &Rc<T>) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    /// Replaces the element at `index`, returning the previous one, or `None`
    /// (leaving `item` unused) if out of bounds.
    pub fn replace_at(&self, index: usize, item: Rc<T>) -> Option<Rc<T>> {
        if index >= self.len() {
            return None;
        }
        let old = {
            let mut items = self.inner.items.borrow_mut();
            std::mem::replace(&mut items[index], Rc::clone(&item))
        };
        self.inner.detach(&old);
        self.inner.attach(&item);
        self.inner.collection_changes.notify(CollectionChange::Replaced {
            index,
            old: Rc::clone(&old),
            new: item,
        });
        Some(old)
    }

    /// Removes every element.
    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.inner.items.borrow_mut());
        for item in &removed {
            self.inner.detach(item);
        }
        self.inner.collection_changes.notify(CollectionChange::Reset);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rc<T>> {
        self.inner.items.borrow().get(index).cloned()
    }

    /// Index of the first occurrence of `item`, compared by pointer.
    #[must_use]
    pub fn index_of(&self, item: &Rc<T>) -> Option<usize> {
        self.inner
            .items
            .borrow()
            .iter()
            .position(|candidate| Rc::ptr_eq(candidate, item))
    }

    /// Snapshot of the elements in order.
    #[must_use]
    pub fn items(&self) -> Vec<Rc<T>> {
        self.inner.items.borrow().clone()
    }

    /// Number of element subscriptions held, one per distinct element.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.inner.attached.borrow().len()
    }

    /// Subscribes to property changes of the elements.
    pub fn subscribe(&self, observer: impl Observer<ItemPropertyChanged> + 'static) -> Subscription {
        self.inner.item_changes.subscribe(observer)
    }

    /// Subscribes to insertions, removals and replacements.
    pub fn subscribe_collection_changed(
        &self,
        observer: impl Observer<CollectionChange<T>> + 'static,
    ) -> Subscription {
        self.inner.collection_changes.subscribe(observer)
    }
}

impl<T: NotifyPropertyChanged + 'static> Default for ObservingCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NotifyPropertyChanged + 'static> Clone for ObservingCollection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: NotifyPropertyChanged + 'static> FromIterator<Rc<T>> for ObservingCollection<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: NotifyPropertyChanged + 'static> fmt::Debug for ObservingCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservingCollection")
            .field("len", &self.len())
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::PropertyChangedSource;

    #[derive(Default)]
    struct Item {
        changes: PropertyChangedSource,
    }

    impl NotifyPropertyChanged for Item {
        fn add_property_changed(&self, handler: PropertyChangedHandler) -> HandlerId {
            self.changes.add(handler)
        }

        fn remove_property_changed(&self, id: HandlerId) {
            self.changes.remove(id);
        }
    }

    fn item() -> Rc<Item> {
        Rc::new(Item::default())
    }

    fn recorded(collection: &ObservingCollection<Item>) -> (Rc<RefCell<Vec<usize>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription =
            collection.subscribe(move |event: &ItemPropertyChanged| sink.borrow_mut().push(event.index));
        (seen, subscription)
    }

    #[test]
    fn insert_subscribes_and_remove_unsubscribes() {
        let collection = ObservingCollection::new();
        let first = item();
        collection.push(Rc::clone(&first));
        assert_eq!(first.changes.handler_count(), 1);

        assert!(collection.remove_item(&first));
        assert_eq!(first.changes.handler_count(), 0);
        assert_eq!(collection.subscription_count(), 0);
    }

    #[test]
    fn index_is_resolved_when_change_arrives() {
        let (a, b, c) = (item(), item(), item());
        let collection: ObservingCollection<Item> =
            [Rc::clone(&a), Rc::clone(&b), Rc::clone(&c)].into_iter().collect();
        let (seen, _sub) = recorded(&collection);

        c.changes.notify("Name").expect("c is in the collection");
        collection.remove_at(0);
        c.changes.notify("Name").expect("c is in the collection");
        collection.insert(0, item());
        collection.insert(0, item());
        c.changes.notify("Name").expect("c is in the collection");

        assert_eq!(*seen.borrow(), vec![2, 1, 3]);
    }

    #[test]
    fn replace_moves_subscription_to_new_element() {
        let (old, new) = (item(), item());
        let collection = ObservingCollection::from_items([Rc::clone(&old)]);

        let replaced = collection.replace_at(0, Rc::clone(&new));
        assert!(replaced.is_some_and(|r| Rc::ptr_eq(&r, &old)));
        assert_eq!(old.changes.handler_count(), 0);
        assert_eq!(new.changes.handler_count(), 1);
        assert!(collection.replace_at(5, item()).is_none());
    }

    #[test]
    fn clear_unsubscribes_everything() {
        let items = [item(), item(), item()];
        let collection = ObservingCollection::from_items(items.iter().cloned());
        assert_eq!(collection.subscription_count(), 3);

        collection.clear();

        assert!(collection.is_empty());
        assert_eq!(collection.subscription_count(), 0);
        assert!(items.iter().all(|i| i.changes.handler_count() == 0));
    }

    #[test]
    fn duplicate_instance_shares_one_subscription() {
        let shared = item();
        let collection = ObservingCollection::new();
        collection.push(Rc::clone(&shared));
        collection.push(Rc::clone(&shared));
        assert_eq!(shared.changes.handler_count(), 1);
        assert_eq!(collection.subscription_count(), 1);

        collection.remove_at(0);
        assert_eq!(shared.changes.handler_count(), 1);
        collection.remove_at(0);
        assert_eq!(shared.changes.handler_count(), 0);
    }

    #[test]
    fn duplicate_instance_reports_first_index() {
        let (a, shared) = (item(), item());
        let collection = ObservingCollection::from_items([a, Rc::clone(&shared), Rc::clone(&shared)]);
        let (seen, _sub) = recorded(&collection);

        shared.changes.notify("Name").expect("shared is in the collection");

        assert_eq!(*seen.borrow(), vec![1]);
    }

    /// Ignores unsubscription, leaving a dangling handler behind.
    #[derive(Default)]
    struct Leaky {
        changes: PropertyChangedSource,
    }

    impl NotifyPropertyChanged for Leaky {
        fn add_property_changed(&self, handler: PropertyChangedHandler) -> HandlerId {
            self.changes.add(handler)
        }

        fn remove_property_changed(&self, _id: HandlerId) {}
    }

    #[test]
    fn change_from_removed_element_is_invariant_violation() {
        let leaky = Rc::new(Leaky::default());
        let collection = ObservingCollection::from_items([Rc::clone(&leaky)]);
        collection.remove_at(0);

        let err = leaky.changes.notify("Name").unwrap_err();
        assert_eq!(
            err,
            CollectionError::InvariantViolation {
                property: "Name".to_string()
            }
        );
    }

    #[test]
    fn dropping_collection_unsubscribes() {
        let element = item();
        {
            let collection = ObservingCollection::new();
            collection.push(Rc::clone(&element));
        }
        assert_eq!(element.changes.handler_count(), 0);
    }

    #[test]
    fn structural_changes_are_published() {
        let collection = ObservingCollection::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let _sub = collection.subscribe_collection_changed(move |change: &CollectionChange<Item>| {
            sink.borrow_mut().push(format!("{change:?}"));
        });

        collection.push(item());
        collection.replace_at(0, item());
        collection.remove_at(0);
        collection.remove_at(0);
        collection.clear();

        assert_eq!(
            *events.borrow(),
            vec![
                "Added { index: 0 }",
                "Replaced { index: 0 }",
                "Removed { index: 0 }",
                "Reset",
            ]
        );
    }

    #[test]
    fn observer_may_mutate_collection_while_notified() {
        let (a, b) = (item(), item());
        let collection = ObservingCollection::from_items([Rc::clone(&a), Rc::clone(&b)]);
        let handle = collection.clone();
        let _sub = collection.subscribe(move |event: &ItemPropertyChanged| {
            handle.remove_at(event.index);
        });

        a.changes.notify("Name").expect("a is in the collection");

        assert_eq!(collection.len(), 1);
        assert_eq!(a.changes.handler_count(), 0);
    }
}
