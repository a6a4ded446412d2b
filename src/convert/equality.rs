// SPDX-License-Identifier: MPL-2.0
//! Equality test against a parameter, mapped to a two-valued output.

use crate::domain::ui::Visibility;
use std::fmt::Display;

/// Result of converting an output back into a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertBack<P> {
    /// Use this value. `None` stands for "no value".
    Value(Option<P>),
    /// Leave the source untouched.
    DoNothing,
}

/// Yields `positive` when a value equals the parameter, `negative` otherwise.
///
/// Values and parameters are compared by their textual form, so an enum
/// variant matches its name and `f64::NAN` matches `NAN`. A missing parameter
/// matches a missing value.
///
/// ```
/// use navkit::convert::EqualToDiscrete;
/// use navkit::domain::ui::Visibility;
///
/// let converter = EqualToDiscrete::visibility();
/// assert_eq!(converter.convert(Some(&"Default"), Some(&"Default")), Visibility::Visible);
/// assert_eq!(converter.convert(Some(&12.4), Some(&f64::NAN)), Visibility::Collapsed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EqualToDiscrete<O> {
    positive: O,
    negative: O,
}

impl<O: Clone + PartialEq> EqualToDiscrete<O> {
    #[must_use]
    pub fn new(positive: O, negative: O) -> Self {
        Self { positive, negative }
    }

    #[must_use]
    pub fn convert<V, P>(&self, value: Option<&V>, parameter: Option<&P>) -> O
    where
        V: Display + ?Sized,
        P: Display + ?Sized,
    {
        let equal = match (parameter, value) {
            (None, None) => true,
            (Some(parameter), Some(value)) => parameter.to_string() == value.to_string(),
            _ => false,
        };
        if equal {
            self.positive.clone()
        } else {
            self.negative.clone()
        }
    }

    /// Returns `parameter` when `output` is the positive value.
    #[must_use]
    pub fn convert_back<P>(&self, output: &O, parameter: Option<P>) -> ConvertBack<P> {
        if *output == self.positive {
            ConvertBack::Value(parameter)
        } else {
            ConvertBack::DoNothing
        }
    }
}

impl EqualToDiscrete<bool> {
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(true, false)
    }
}

impl EqualToDiscrete<Visibility> {
    #[must_use]
    pub fn visibility() -> Self {
        Self::new(Visibility::Visible, Visibility::Collapsed)
    }
}
