// SPDX-License-Identifier: MPL-2.0
//! Navigation value types.
//!
//! Keys name destinations, locators describe where a destination comes from,
//! and entry ids identify one push of a destination onto a stack.

mod key;

pub use key::{EntryId, Locator, PageKey};
