#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A 2D point on a gesture path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Constructs a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}
