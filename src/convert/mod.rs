// SPDX-License-Identifier: MPL-2.0
//! Value converters for presentation code.
//!
//! Pure functions and small value types turning model values into display
//! values and back. None of them depends on a UI toolkit.

mod boolean;
mod color;
mod equality;
mod linear;
mod si_units;

pub use boolean::{bool_to_visibility, bool_to_visibility_with, inverse, visibility_to_bool};
pub use color::{darken, darken_with, DEFAULT_DARKEN_FACTOR};
pub use equality::{ConvertBack, EqualToDiscrete};
pub use linear::{LinearTransform, ParseLinearTransformError};
pub use si_units::{format_si, SiPrefixes, PREFIX_COUNT};
