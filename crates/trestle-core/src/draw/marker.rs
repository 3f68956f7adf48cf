use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Glyph painted on a repeat loop-back to indicate right-to-left traversal.
pub const LOOP_ARROW_GLYPH: &str = "◀";

/// A glyph painted centred at an offset in a node's local frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    glyph: String,
    offset: Point,
}

impl Marker {
    pub fn new(glyph: impl Into<String>, offset: Point) -> Self {
        Self {
            glyph: glyph.into(),
            offset,
        }
    }

    /// Returns the glyph content
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Returns the paint position in the owning node's frame
    pub fn offset(&self) -> Point {
        self.offset
    }
}
