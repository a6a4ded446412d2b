// SPDX-License-Identifier: MPL-2.0
//! Boolean and visibility conversions.

use crate::domain::ui::Visibility;

/// Maps a flag to [`Visibility::Visible`] or [`Visibility::Collapsed`].
///
/// An absent flag counts as `false`. `invert` flips the flag first.
#[must_use]
pub fn bool_to_visibility(value: Option<bool>, invert: bool) -> Visibility {
    if value.unwrap_or(false) != invert {
        Visibility::Visible
    } else {
        Visibility::Collapsed
    }
}

/// Like [`bool_to_visibility`], reading `invert` from a textual parameter.
///
/// A parameter that is not `true` or `false` (case-insensitive) yields
/// [`Visibility::Collapsed`].
#[must_use]
pub fn bool_to_visibility_with(value: Option<bool>, parameter: Option<&str>) -> Visibility {
    match parameter {
        None => bool_to_visibility(value, false),
        Some(parameter) => match parse_flag(parameter) {
            Some(invert) => bool_to_visibility(value, invert),
            None => Visibility::Collapsed,
        },
    }
}

/// `true` for [`Visibility::Visible`], flipped by `invert`.
#[must_use]
pub fn visibility_to_bool(value: Visibility, invert: bool) -> bool {
    value.is_visible() != invert
}

#[must_use]
pub fn inverse(value: bool) -> bool {
    !value
}

fn parse_flag(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
