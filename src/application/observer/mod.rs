// SPDX-License-Identifier: MPL-2.0
//! Observer fan-out shared by the navigation stack and observing collections.
//!
//! [`ObserverSet`] delivers every value to its observers in subscription
//! order. It is safe to subscribe or unsubscribe from inside a callback, and
//! values published from inside a callback are queued until the current
//! broadcast has reached every observer.

mod set;
mod subscription;

pub use set::ObserverSet;
pub use subscription::Subscription;
