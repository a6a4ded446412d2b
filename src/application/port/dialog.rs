// SPDX-License-Identifier: MPL-2.0
//! Dialog port definitions.
//!
//! This module defines how message boxes and file dialogs are requested.
//! Infrastructure adapters (see [`crate::infrastructure::dialogs`]) implement
//! the traits on top of a concrete toolkit.
//!
//! # Design Notes
//!
//! - Methods block until the user dismisses the dialog
//! - A cancelled file dialog yields `None`, never an error
//! - Absent button texts fall back to the adapter's localized defaults

use std::path::{Path, PathBuf};

// =============================================================================
// Message requests
// =============================================================================

/// A single-button message box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRequest {
    pub message: String,
    pub title: Option<String>,
    pub button_text: Option<String>,
}

impl MessageRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }
}

/// A two-button question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub message: String,
    pub title: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl ConfirmRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_buttons(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_text = Some(confirm.into());
        self.cancel_text = Some(cancel.into());
        self
    }
}

/// Port for message boxes.
pub trait DialogService {
    /// Displays an error message.
    fn show_error(&self, request: &MessageRequest);

    /// Displays an informational message.
    fn show_message(&self, request: &MessageRequest);

    /// Asks a question. Returns `true` if the user confirmed.
    fn confirm(&self, request: &ConfirmRequest) -> bool;

    /// Displays the message of `error`.
    fn show_error_for(&self, error: &dyn std::error::Error, title: Option<&str>) {
        let mut request = MessageRequest::new(error.to_string());
        request.title = title.map(str::to_owned);
        self.show_error(&request);
    }
}

// =============================================================================
// File filters
// =============================================================================

/// One named entry of a file type filter.
///
/// An empty extension list matches every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    #[must_use]
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| (*e).to_string()).collect(),
        }
    }

    /// Returns `true` if the filter does not restrict extensions.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Parses the `Description|pattern;pattern|Description|pattern` syntax.
    ///
    /// ```
    /// use navkit::application::port::FileFilter;
    ///
    /// let filters = FileFilter::parse_list("CSV Files (*.csv)|*.csv|All files|*.*");
    /// assert_eq!(filters[0].extensions, vec!["csv".to_string()]);
    /// assert!(filters[1].is_any());
    /// ```
    ///
    /// A trailing description without a pattern is dropped.
    #[must_use]
    pub fn parse_list(list: &str) -> Vec<Self> {
        let parts: Vec<&str> = list.split('|').collect();
        parts
            .chunks_exact(2)
            .filter_map(|pair| {
                let name = pair[0].trim();
                if name.is_empty() && pair[1].trim().is_empty() {
                    return None;
                }
                Some(Self {
                    name: name.to_string(),
                    extensions: parse_patterns(pair[1]),
                })
            })
            .collect()
    }
}

fn parse_patterns(patterns: &str) -> Vec<String> {
    let mut extensions = Vec::new();
    for pattern in patterns.split(';').map(str::trim) {
        let ext = pattern.trim_start_matches('*').trim_start_matches('.');
        if ext.is_empty() || ext == "*" {
            // A wildcard anywhere widens the filter to every file.
            return Vec::new();
        }
        extensions.push(ext.to_string());
    }
    extensions
}

// =============================================================================
// File dialog requests
// =============================================================================

/// Parameters of an "open file" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenFileRequest {
    pub initial_directory: Option<PathBuf>,
    pub filters: Vec<FileFilter>,
    pub title: Option<String>,
    pub multi_select: bool,
}

/// Parameters of a "save file" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveFileRequest {
    pub initial_directory: Option<PathBuf>,
    pub filters: Vec<FileFilter>,
    pub title: Option<String>,
    pub file_name: Option<String>,
}

/// Port for file and folder pickers.
pub trait FileDialogService {
    /// Lets the user pick one file, or several with `multi_select`.
    fn open_files(&self, request: &OpenFileRequest) -> Option<Vec<PathBuf>>;

    /// Lets the user choose a destination file.
    fn save_file(&self, request: &SaveFileRequest) -> Option<PathBuf>;

    /// Lets the user pick a folder.
    fn pick_folder(
        &self,
        initial_directory: Option<&Path>,
        description: Option<&str>,
    ) -> Option<PathBuf>;
}
