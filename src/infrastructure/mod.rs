// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, on top of native platform dialogs.
//!
//! # Available Adapters
//!
//! - [`dialogs`]: Message boxes and file pickers via `rfd` (implements
//!   [`DialogService`] and [`FileDialogService`])
//!
//! [`DialogService`]: crate::application::port::DialogService
//! [`FileDialogService`]: crate::application::port::FileDialogService

pub mod dialogs;

// Re-export main types for convenience
pub use dialogs::{RfdDialogService, RfdFileDialogService};
