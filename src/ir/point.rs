//! Labeled time instants.

use serde::{Deserialize, Serialize};

/// An instantaneous labeled event on a point tier (Praat `TextTier`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Time of the event, in seconds.
    pub value: f64,

    /// Label mark.
    pub mark: String,
}

impl Point {
    /// Creates a new point.
    pub fn new(value: f64, mark: impl Into<String>) -> Self {
        Self {
            value,
            mark: mark.into(),
        }
    }
}
