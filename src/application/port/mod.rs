// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! application code implement. These traits use only domain types, ensuring
//! the navigation and collection services stay independent of any toolkit.
//!
//! # Available Ports
//!
//! - [`change`]: Property change notifications raised by collection elements
//! - [`dialog`]: Message boxes and file dialogs
//! - [`materializer`]: Turning locators into live destinations and back
//! - [`observer`]: Push notification receivers
//!
//! # Design Notes
//!
//! - Navigation and collection ports are single-threaded (`Rc`, no `Send`)
//! - Dialog methods block; no `async fn`

pub mod change;
pub mod dialog;
pub mod materializer;
pub mod observer;

// Re-export main types for convenience
pub use change::{HandlerId, NotifyPropertyChanged, PropertyChanged, PropertyChangedHandler};
pub use dialog::{
    ConfirmRequest, DialogService, FileDialogService, FileFilter, MessageRequest, OpenFileRequest,
    SaveFileRequest,
};
pub use materializer::{
    CloseHook, DestinationMaterializer, OwnedWindow, PageFactory, WindowFactory,
};
pub use observer::Observer;
