//! Measure pass: post-order sizing of the diagram tree.
//!
//! Children are sized strictly before their parent, since every composite
//! size is a function of its children's sizes. The oracle is consulted
//! exactly once per leaf.

use log::trace;

use trestle_core::{geometry::Size, node::Node};

use super::{Measure, metrics};
use crate::error::TrestleError;

/// Sizes for one node and its subtree, parallel to the input tree.
#[derive(Debug)]
pub(super) struct Measured {
    pub(super) size: Size,
    pub(super) children: Vec<Measured>,
}

pub(super) fn measure_node<M: Measure>(
    node: &Node,
    oracle: &mut M,
) -> Result<Measured, TrestleError> {
    match node {
        Node::Leaf(leaf) => {
            let intrinsic = oracle
                .measure(leaf.text())
                .map_err(TrestleError::Measure)?;
            trace!(
                text = leaf.text(),
                width = intrinsic.width(),
                height = intrinsic.height();
                "measured leaf",
            );
            let size = match leaf.height_override() {
                Some(height) => intrinsic.with_height(height),
                None => intrinsic,
            };
            Ok(Measured {
                size,
                children: Vec::new(),
            })
        }
        Node::Sequence(children) => {
            let measured = measure_children(children, oracle, "sequence with no children")?;
            let width = measured.iter().map(|m| m.size.width()).sum::<u32>()
                + metrics::GAP * (measured.len() as u32 + 1);
            let height = measured
                .iter()
                .map(|m| m.size.height())
                .max()
                .unwrap_or(0);
            Ok(Measured {
                size: Size::new(width, height),
                children: measured,
            })
        }
        Node::Choice(options) => {
            let measured = measure_children(options, oracle, "choice with no options")?;
            let width = measured
                .iter()
                .map(|m| m.size.width())
                .max()
                .unwrap_or(0)
                + metrics::CHOICE_MARGIN;
            let height = measured.iter().map(|m| m.size.height()).sum::<u32>()
                + metrics::ROW_GAP * (measured.len() as u32 - 1);
            Ok(Measured {
                size: Size::new(width, height),
                children: measured,
            })
        }
        Node::Repeat(body) => {
            let body_measured = measure_node(body, oracle)?;
            let size = Size::new(
                body_measured.size.width() + metrics::LOOP_MARGIN,
                body_measured.size.height() + metrics::LOOP_HEIGHT,
            );
            Ok(Measured {
                size,
                children: vec![body_measured],
            })
        }
    }
}

/// Sizes a composite's children, rejecting hand-built childless composites
/// before any oracle call is spent on the subtree.
fn measure_children<M: Measure>(
    children: &[Node],
    oracle: &mut M,
    empty_message: &str,
) -> Result<Vec<Measured>, TrestleError> {
    if children.is_empty() {
        return Err(TrestleError::UnsupportedNode(empty_message.into()));
    }
    children
        .iter()
        .map(|child| measure_node(child, oracle))
        .collect()
}
