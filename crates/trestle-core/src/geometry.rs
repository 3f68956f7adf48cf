use serde::{Deserialize, Serialize};

/// A position in a node's local frame, in whole diagram units.
///
/// Layout works entirely in non-negative integer units; anything measured
/// in fractional pixels is floored before it enters the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    x: u32,
    y: u32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> u32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> u32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    ///
    /// Useful for translating a child offset into an ancestor's frame.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> u32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns a copy of this size with the height replaced
    pub fn with_height(self, height: u32) -> Self {
        Self { height, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3, 4);
        assert_eq!(point.x(), 3);
        assert_eq!(point.y(), 4);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0);
        assert_eq!(point.y(), 0);
    }

    #[test]
    fn test_point_add() {
        let p1 = Point::new(1, 2);
        let p2 = Point::new(3, 4);
        let result = p1.add_point(p2);
        assert_eq!(result.x(), 4);
        assert_eq!(result.y(), 6);
    }

    #[test]
    fn test_size_new() {
        let size = Size::new(100, 200);
        assert_eq!(size.width(), 100);
        assert_eq!(size.height(), 200);
    }

    #[test]
    fn test_size_default_is_zero() {
        let size = Size::default();
        assert!(size.is_zero());
        assert!(!Size::new(1, 0).is_zero());
        assert!(!Size::new(0, 1).is_zero());
    }

    #[test]
    fn test_size_with_height() {
        let size = Size::new(10, 20).with_height(8);
        assert_eq!(size.width(), 10); // unchanged
        assert_eq!(size.height(), 8);
    }
}
