use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
///
/// # Examples
///
/// ```
/// use cssbuild::types::Rect;
///
/// let rect = Rect::new(10.0, 20.0);
/// assert_eq!(rect.area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square with the given side length.
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
