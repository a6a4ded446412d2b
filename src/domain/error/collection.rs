// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised by change-propagating collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An element sent a change notification although it is no longer part
    /// of the collection. The collection still holds a subscription it should
    /// have released.
    InvariantViolation {
        /// Name of the property the stray notification was about.
        property: String,
    },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::InvariantViolation { property } => write!(
                f,
                "Received property notification ({property}) from item not in collection"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}
