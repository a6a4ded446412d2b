// SPDX-License-Identifier: MPL-2.0
//! Application layer - Stateful services and their ports.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`observer`]: Subscription plumbing shared by every observable service
//! - [`navigation`]: Key registry and navigation stack
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Callers receive services explicitly, never through a global lookup
//!
//! # Example
//!
//! ```ignore
//! use navkit::application::navigation::{NavigationStack, PageFlavor};
//!
//! let stack = NavigationStack::new(PageFlavor::new(MyPages::default()));
//! stack.register("first", "/View/FirstView");
//! stack.navigate_to("first");
//! ```

pub mod navigation;
pub mod observer;
pub mod port;
