use serde::{Deserialize, Serialize};

/// Quarter of a disk, naming which part of a circle an arc covers.
///
/// Quadrants are relative to the circle's centre with y growing downward,
/// so `TopLeft` is the quarter between the west and north compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A single connection-path primitive in a node's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connector {
    /// Axis-aligned segment starting at `(x, y)`, extending right when
    /// `horizontal` and down otherwise.
    Straight {
        x: u32,
        y: u32,
        length: u32,
        horizontal: bool,
    },
    /// Quarter-circle arc of the circle centred at `(x, y)`, covering the
    /// named quadrant of the disk.
    Curve {
        x: u32,
        y: u32,
        radius: u32,
        quadrant: Quadrant,
    },
}

impl Connector {
    /// A horizontal segment running right from `(x, y)`.
    pub fn horizontal(x: u32, y: u32, length: u32) -> Self {
        Connector::Straight {
            x,
            y,
            length,
            horizontal: true,
        }
    }

    /// A vertical segment running down from `(x, y)`.
    pub fn vertical(x: u32, y: u32, length: u32) -> Self {
        Connector::Straight {
            x,
            y,
            length,
            horizontal: false,
        }
    }

    /// A quarter arc centred at `(x, y)`.
    pub fn curve(x: u32, y: u32, radius: u32, quadrant: Quadrant) -> Self {
        Connector::Curve {
            x,
            y,
            radius,
            quadrant,
        }
    }
}
