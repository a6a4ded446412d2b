// SPDX-License-Identifier: MPL-2.0
//! Change-propagating collections.

mod observing;
mod source;

pub use observing::{CollectionChange, ItemPropertyChanged, ObservingCollection};
pub use source::PropertyChangedSource;
