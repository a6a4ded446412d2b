// SPDX-License-Identifier: MPL-2.0
//! UI value objects shared by converters and dialog ports.

mod color;
mod visibility;

pub use color::Rgb;
pub use visibility::Visibility;
