// SPDX-License-Identifier: MPL-2.0
//! Visibility of a visual element.

/// How an element takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Displayed.
    #[default]
    Visible,
    /// Not displayed, but still reserves its space.
    Hidden,
    /// Not displayed and takes no space.
    Collapsed,
}

impl Visibility {
    /// Returns `true` only for [`Visibility::Visible`].
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Visibility::Visible => "Visible",
            Visibility::Hidden => "Hidden",
            Visibility::Collapsed => "Collapsed",
        };
        f.write_str(name)
    }
}
