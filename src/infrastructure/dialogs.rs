// SPDX-License-Identifier: MPL-2.0
//! Native dialogs via `rfd`.
//!
//! Both adapters block the calling thread until the dialog is dismissed.

use crate::application::port::{
    ConfirmRequest, DialogService, FileDialogService, FileFilter, MessageRequest,
    OpenFileRequest, SaveFileRequest,
};
use crate::i18n::I18n;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

// =============================================================================
// Message boxes
// =============================================================================

/// Message boxes with localized default button labels.
#[derive(Debug, Clone)]
pub struct RfdDialogService {
    ok_label: String,
    cancel_label: String,
    error_title: String,
    message_title: String,
}

impl RfdDialogService {
    /// Takes the default labels from `i18n`.
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        Self {
            ok_label: i18n.tr("dialog-button-ok"),
            cancel_label: i18n.tr("dialog-button-cancel"),
            error_title: i18n.tr("dialog-title-error"),
            message_title: i18n.tr("dialog-title-message"),
        }
    }

    fn show(&self, level: MessageLevel, default_title: &str, request: &MessageRequest) {
        let button = request
            .button_text
            .clone()
            .unwrap_or_else(|| self.ok_label.clone());
        MessageDialog::new()
            .set_level(level)
            .set_title(request.title.as_deref().unwrap_or(default_title))
            .set_description(request.message.as_str())
            .set_buttons(MessageButtons::OkCustom(button))
            .show();
    }
}

impl Default for RfdDialogService {
    fn default() -> Self {
        Self::new(&I18n::default())
    }
}

impl DialogService for RfdDialogService {
    fn show_error(&self, request: &MessageRequest) {
        log::debug!("Showing error dialog: {}", request.message);
        self.show(MessageLevel::Error, &self.error_title, request);
    }

    fn show_message(&self, request: &MessageRequest) {
        self.show(MessageLevel::Info, &self.message_title, request);
    }

    fn confirm(&self, request: &ConfirmRequest) -> bool {
        let confirm = request
            .confirm_text
            .clone()
            .unwrap_or_else(|| self.ok_label.clone());
        let cancel = request
            .cancel_text
            .clone()
            .unwrap_or_else(|| self.cancel_label.clone());

        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(request.title.as_deref().unwrap_or(&self.message_title))
            .set_description(request.message.as_str())
            .set_buttons(MessageButtons::OkCancelCustom(confirm.clone(), cancel))
            .show();

        match result {
            MessageDialogResult::Ok | MessageDialogResult::Yes => true,
            MessageDialogResult::Custom(label) => label == confirm,
            _ => false,
        }
    }
}

// =============================================================================
// File dialogs
// =============================================================================

/// Native open/save/folder pickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdFileDialogService;

impl RfdFileDialogService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn build_dialog(
    title: Option<&str>,
    initial_directory: Option<&Path>,
    filters: &[FileFilter],
) -> FileDialog {
    let mut dialog = FileDialog::new();
    if let Some(title) = title {
        dialog = dialog.set_title(title);
    }
    if let Some(directory) = initial_directory {
        dialog = dialog.set_directory(directory);
    }
    for filter in filters {
        dialog = if filter.is_any() {
            dialog.add_filter(filter.name.as_str(), &["*"])
        } else {
            dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice())
        };
    }
    dialog
}

impl FileDialogService for RfdFileDialogService {
    fn open_files(&self, request: &OpenFileRequest) -> Option<Vec<PathBuf>> {
        let dialog = build_dialog(
            request.title.as_deref(),
            request.initial_directory.as_deref(),
            &request.filters,
        );
        if request.multi_select {
            dialog.pick_files()
        } else {
            dialog.pick_file().map(|path| vec![path])
        }
    }

    fn save_file(&self, request: &SaveFileRequest) -> Option<PathBuf> {
        let mut dialog = build_dialog(
            request.title.as_deref(),
            request.initial_directory.as_deref(),
            &request.filters,
        );
        if let Some(name) = &request.file_name {
            dialog = dialog.set_file_name(name.as_str());
        }
        dialog.save_file()
    }

    fn pick_folder(
        &self,
        initial_directory: Option<&Path>,
        description: Option<&str>,
    ) -> Option<PathBuf> {
        build_dialog(description, initial_directory, &[]).pick_folder()
    }
}
