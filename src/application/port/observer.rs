// SPDX-License-Identifier: MPL-2.0
//! Observer port.
//!
//! An [`Observer`] is the receiving end of a push notification stream. Any
//! `FnMut(&T)` closure is an observer, which covers most call sites:
//!
//! ```
//! use navkit::application::port::Observer;
//!
//! fn feed(observer: &mut impl Observer<u32>) {
//!     observer.on_next(&7);
//!     observer.on_completed();
//! }
//!
//! let mut seen = Vec::new();
//! feed(&mut |value: &u32| seen.push(*value));
//! assert_eq!(seen, vec![7]);
//! ```

/// Receives values pushed by an observable source.
pub trait Observer<T: ?Sized> {
    /// Called once per published value.
    fn on_next(&mut self, value: &T);

    /// Called when the source will not publish anything else.
    fn on_completed(&mut self) {}
}

impl<T, F> Observer<T> for F
where
    T: ?Sized,
    F: FnMut(&T),
{
    fn on_next(&mut self, value: &T) {
        self(value);
    }
}
