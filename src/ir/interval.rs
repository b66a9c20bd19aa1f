//! Labeled time spans.

use serde::{Deserialize, Serialize};

/// A labeled span on an interval tier's time axis, in seconds.
///
/// Construction does not require `xmin <= xmax`; inverted intervals are
/// reported by [`crate::validation::validate_textgrid`] instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Start time.
    pub xmin: f64,

    /// End time.
    pub xmax: f64,

    /// Label text, stored exactly as read (doubled quotes are not unescaped).
    pub text: String,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(xmin: f64, xmax: f64, text: impl Into<String>) -> Self {
        Self {
            xmin,
            xmax,
            text: text.into(),
        }
    }

    /// Returns `xmax - xmin`.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Returns the midpoint of the interval.
    #[inline]
    pub fn median(&self) -> f64 {
        (self.xmin + self.xmax) / 2.0
    }

    /// Returns true if `xmin <= xmax`.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.xmin <= self.xmax
    }
}
