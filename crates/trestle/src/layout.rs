//! Two-pass layout of diagram trees.
//!
//! Layout consumes a read-only [`Node`] tree and a measurement oracle and
//! produces a parallel [`Geometry`] tree. Pass one walks the tree in
//! post-order, asking the oracle for each leaf's intrinsic size and rolling
//! sizes up through the composites. Pass two walks top-down, placing each
//! child in its parent's local frame and synthesising the connector
//! primitives that join them.
//!
//! Nothing is mutated in place: re-running layout with different
//! measurements yields a fresh tree, and a failing oracle aborts the call
//! without leaving partial state behind.

mod measure;
pub mod metrics;
mod position;


use log::debug;
use serde::{Deserialize, Serialize};

use trestle_core::{
    draw::{Connector, Marker},
    geometry::{Point, Size},
    node::Node,
};

use crate::error::TrestleError;

/// Measurement oracle: reports the intrinsic rendered size of leaf content.
///
/// Implemented for free by any `FnMut(&str) -> Size` closure. A renderer
/// adapter typically attaches the text to a live surface, reads back its
/// intrinsic size in whole units (flooring fractional pixels) and detaches
/// it again.
pub trait Measure {
    fn measure(&mut self, text: &str) -> Result<Size, Box<dyn std::error::Error>>;
}

impl<F> Measure for F
where
    F: FnMut(&str) -> Size,
{
    fn measure(&mut self, text: &str) -> Result<Size, Box<dyn std::error::Error>> {
        Ok(self(text))
    }
}

/// Layout output for a single node, parallel to the input tree.
///
/// Offsets, connectors and markers are all expressed in this node's local
/// frame; a renderer walks the node and geometry trees in lockstep,
/// accumulating offsets into its own absolute coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    size: Size,
    children: Vec<Positioned>,
    connectors: Vec<Connector>,
    markers: Vec<Marker>,
}

impl Geometry {
    /// Returns the node's overall size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the positioned child geometries, in child order
    pub fn children(&self) -> &[Positioned] {
        &self.children
    }

    /// Returns the connector primitives joining this node's children
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Returns the glyph markers synthesised for this node
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// A child geometry together with its offset in the parent's frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positioned {
    offset: Point,
    geometry: Geometry,
}

impl Positioned {
    /// Returns the child's offset in the parent's local frame
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Returns the child's geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

/// Lays out a diagram tree against a measurement oracle.
///
/// Fails with [`TrestleError::UnsupportedNode`] on a hand-built tree that
/// violates the builder's guarantees, or with [`TrestleError::Measure`]
/// when the oracle reports an error; either way the input tree is
/// untouched and the call can simply be retried.
pub fn layout<M: Measure>(node: &Node, mut oracle: M) -> Result<Geometry, TrestleError> {
    let measured = measure::measure_node(node, &mut oracle)?;
    let geometry = position::position_node(node, &measured);
    debug!(
        width = geometry.size().width(),
        height = geometry.size().height();
        "layout complete",
    );
    Ok(geometry)
}
