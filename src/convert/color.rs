// SPDX-License-Identifier: MPL-2.0
use crate::domain::ui::Rgb;

/// Share of each channel kept by [`darken_with`] when no factor is given.
pub const DEFAULT_DARKEN_FACTOR: f64 = 0.7;

/// Scales every channel by `factor`, truncating towards zero.
#[must_use]
pub fn darken(color: Rgb, factor: f64) -> Rgb {
    // `as` saturates, so factors above 1 clip at 255
    color.map_channels(|channel| (f64::from(channel) * factor) as u8)
}

/// Darkens by the factor in `parameter`, or by [`DEFAULT_DARKEN_FACTOR`] if
/// the parameter is absent or not a number.
#[must_use]
pub fn darken_with(color: Rgb, parameter: Option<&str>) -> Rgb {
    let factor = parameter
        .and_then(|p| p.trim().parse::<f64>().ok())
        .unwrap_or(DEFAULT_DARKEN_FACTOR);
    darken(color, factor)
}
