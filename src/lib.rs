// SPDX-License-Identifier: MPL-2.0
//! `navkit` provides the state machines behind desktop application plumbing.
//!
//! - A key based navigation stack, for in-process pages or owned windows,
//!   broadcasting its current top to observers
//! - A collection re-publishing the property changes of its elements tagged
//!   with their current index
//! - Value converters, dialog services and localized SI formatting
//!
//! Everything is toolkit independent: pages, windows and dialogs are reached
//! through the ports in [`application::port`].

#![doc(html_root_url = "https://docs.rs/navkit/0.1.0")]

pub mod application;
pub mod collections;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod services;

pub use application::navigation::{DestinationRegistry, NavigationStack, PageFlavor, WindowFlavor};
pub use application::observer::Subscription;
pub use collections::{ObservingCollection, PropertyChangedSource};
pub use error::{Error, Result};
pub use services::Services;
