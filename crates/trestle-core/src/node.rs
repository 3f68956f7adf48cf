//! The canonical diagram tree.
//!
//! A diagram is a tree of four node kinds: terminal content ([`Leaf`]),
//! ordered composition ([`Node::Sequence`]), alternation ([`Node::Choice`])
//! and one-or-more looping ([`Node::Repeat`]). Trees are built once by the
//! builder functions in the `trestle` crate and are read-only afterwards;
//! the builder guarantees the canonical-form invariants documented on each
//! variant.

use serde::{Deserialize, Serialize};

/// Glyph displayed on the skip branch of an optional construct.
pub const BYPASS_GLYPH: &str = "↷";

/// Forced height, in diagram units, for the bypass-marker glyph row.
///
/// The skip arrow renders as a compact glyph; its row height is pinned to
/// this constant regardless of what the measurement oracle reports for the
/// glyph text.
pub const BYPASS_MARKER_HEIGHT: u32 = 8;

/// Terminal content: opaque text or a fixed glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    text: String,
    height_override: Option<u32>,
}

impl Leaf {
    /// Creates a text leaf measured entirely by the oracle.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            height_override: None,
        }
    }

    /// Creates a glyph leaf whose row height is pinned to `height`.
    ///
    /// The oracle still supplies the width.
    pub fn glyph(text: impl Into<String>, height: u32) -> Self {
        Self {
            text: text.into(),
            height_override: Some(height),
        }
    }

    /// Returns the leaf content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the pinned row height, if any
    pub fn height_override(&self) -> Option<u32> {
        self.height_override
    }
}

/// A node of the diagram tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal content with no children.
    Leaf(Leaf),
    /// Ordered composition; traverse each child once, left to right.
    ///
    /// Canonical form: at least two children, none of which is itself a
    /// `Sequence`.
    Sequence(Vec<Node>),
    /// Alternation; traverse exactly one option, stacked top to bottom.
    ///
    /// Canonical form: at least two options, none of which is itself a
    /// `Choice`, and no two `Leaf` options share the same text.
    Choice(Vec<Node>),
    /// One-or-more looping composition over a single body.
    Repeat(Box<Node>),
}

impl Node {
    /// The glyph leaf that marks the skip branch of an optional construct.
    pub fn bypass_marker() -> Self {
        Node::Leaf(Leaf::glyph(BYPASS_GLYPH, BYPASS_MARKER_HEIGHT))
    }

    /// Returns true if this node is a leaf with the given text.
    pub fn is_leaf_with_text(&self, text: &str) -> bool {
        matches!(self, Node::Leaf(leaf) if leaf.text() == text)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Leaf(Leaf::new(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Leaf(Leaf::new(text))
    }
}
