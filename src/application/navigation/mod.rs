// SPDX-License-Identifier: MPL-2.0
//! Key-based navigation.
//!
//! - [`DestinationRegistry`]: maps page keys to locators
//! - [`NavigationStack`]: the push/pop state machine
//! - [`PageFlavor`] and [`WindowFlavor`]: how destinations come and go

mod flavor;
mod registry;
mod stack;

pub use flavor::{PageFlavor, WindowFlavor};
pub use registry::DestinationRegistry;
pub use stack::NavigationStack;
