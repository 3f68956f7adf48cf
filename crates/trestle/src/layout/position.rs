//! Position pass: top-down placement and connector synthesis.
//!
//! Works over the size tree produced by the measure pass; each composite
//! places its children in its own local frame and emits the connector
//! primitives joining them. Offsets never leave the parent's frame, so the
//! pass is a straight pre-order walk with no global coordinates.

use trestle_core::{
    draw::{Connector, LOOP_ARROW_GLYPH, Marker, Quadrant},
    geometry::Point,
    node::Node,
};

use super::{Geometry, Positioned, measure::Measured, metrics};

pub(super) fn position_node(node: &Node, measured: &Measured) -> Geometry {
    match node {
        Node::Leaf(_) => Geometry {
            size: measured.size,
            children: Vec::new(),
            connectors: Vec::new(),
            markers: Vec::new(),
        },
        Node::Sequence(children) => position_sequence(children, measured),
        Node::Choice(options) => position_choice(options, measured),
        Node::Repeat(body) => position_repeat(body, measured),
    }
}

/// Children left to right, vertically centred, with a run of track before,
/// between and after them.
fn position_sequence(children: &[Node], measured: &Measured) -> Geometry {
    let size = measured.size;
    let center_y = size.height() / 2;

    let mut placed = Vec::with_capacity(children.len());
    let mut connectors = Vec::with_capacity(children.len() + 1);
    let mut x = 0;
    for (child, child_measured) in children.iter().zip(&measured.children) {
        connectors.push(Connector::horizontal(x, center_y, metrics::GAP));
        x += metrics::GAP;
        let child_size = child_measured.size;
        placed.push(Positioned {
            offset: Point::new(x, (size.height() - child_size.height()) / 2),
            geometry: position_node(child, child_measured),
        });
        x += child_size.width();
    }
    connectors.push(Connector::horizontal(x, center_y, metrics::GAP));

    Geometry {
        size,
        children: placed,
        connectors,
        markers: Vec::new(),
    }
}

/// Options stacked top to bottom, horizontally centred, each joined to the
/// entry and exit junctions at the node's vertical centre.
fn position_choice(options: &[Node], measured: &Measured) -> Geometry {
    let size = measured.size;
    let center_y = size.height() / 2;

    let mut placed = Vec::with_capacity(options.len());
    let mut connectors = Vec::new();
    let mut y = 0;
    for (option, option_measured) in options.iter().zip(&measured.children) {
        let option_size = option_measured.size;
        let x = (size.width() - option_size.width()) / 2;
        let row_center = y + option_size.height() / 2;
        entry_path(&mut connectors, center_y, row_center, x);
        exit_path(
            &mut connectors,
            size.width(),
            center_y,
            row_center,
            x + option_size.width(),
        );
        placed.push(Positioned {
            offset: Point::new(x, y),
            geometry: position_node(option, option_measured),
        });
        y += option_size.height() + metrics::ROW_GAP;
    }

    Geometry {
        size,
        children: placed,
        connectors,
        markers: Vec::new(),
    }
}

/// Entry run from the left junction at `(0, center_y)` into an option row.
///
/// An aligned row gets a single straight. Otherwise the path bends through
/// a vertical run at `x = JUNCTION`: approach straight, quarter arc away
/// from the junction level, vertical run of `d - 2r`, quarter arc into the
/// row, straight to the option's left edge.
fn entry_path(connectors: &mut Vec<Connector>, center_y: u32, row_center: u32, option_left: u32) {
    if row_center == center_y {
        push_horizontal(connectors, 0, center_y, option_left);
        return;
    }
    let above = row_center < center_y;
    let d = center_y.abs_diff(row_center);
    let r = bend_radius(d);
    let turn_x = metrics::JUNCTION;

    push_horizontal(connectors, 0, center_y, turn_x - r);
    if above {
        push_curve(connectors, turn_x - r, center_y - r, r, Quadrant::BottomRight);
        push_vertical(connectors, turn_x, row_center + r, d - 2 * r);
        push_curve(connectors, turn_x + r, row_center + r, r, Quadrant::TopLeft);
    } else {
        push_curve(connectors, turn_x - r, center_y + r, r, Quadrant::TopRight);
        push_vertical(connectors, turn_x, center_y + r, d - 2 * r);
        push_curve(connectors, turn_x + r, row_center - r, r, Quadrant::BottomLeft);
    }
    push_horizontal(
        connectors,
        turn_x + r,
        row_center,
        option_left.saturating_sub(turn_x + r),
    );
}

/// Exit run from an option's right edge to the junction at
/// `(width, center_y)`; the mirror image of [`entry_path`].
fn exit_path(
    connectors: &mut Vec<Connector>,
    width: u32,
    center_y: u32,
    row_center: u32,
    option_right: u32,
) {
    if row_center == center_y {
        push_horizontal(connectors, option_right, center_y, width - option_right);
        return;
    }
    let above = row_center < center_y;
    let d = center_y.abs_diff(row_center);
    let r = bend_radius(d);
    let turn_x = width - metrics::JUNCTION;

    push_horizontal(
        connectors,
        option_right,
        row_center,
        (turn_x - r).saturating_sub(option_right),
    );
    if above {
        push_curve(connectors, turn_x - r, row_center + r, r, Quadrant::TopRight);
        push_vertical(connectors, turn_x, row_center + r, d - 2 * r);
        push_curve(connectors, turn_x + r, center_y - r, r, Quadrant::BottomLeft);
    } else {
        push_curve(connectors, turn_x - r, row_center - r, r, Quadrant::BottomRight);
        push_vertical(connectors, turn_x, center_y + r, d - 2 * r);
        push_curve(connectors, turn_x + r, center_y + r, r, Quadrant::TopLeft);
    }
    push_horizontal(connectors, turn_x + r, center_y, metrics::JUNCTION - r);
}

/// Body inset on both axes, forward runs at the body's vertical centre and
/// the loop-back path above it, traversed right to left.
fn position_repeat(body: &Node, measured: &Measured) -> Geometry {
    let size = measured.size;
    let body_measured = &measured.children[0];
    let body_size = body_measured.size;

    let inset = Point::new(metrics::LOOP_MARGIN / 2, metrics::LOOP_HEIGHT / 2);
    let center_y = inset.y() + body_size.height() / 2;

    let mut connectors = Vec::with_capacity(7);
    connectors.push(Connector::horizontal(0, center_y, inset.x()));
    connectors.push(Connector::horizontal(
        inset.x() + body_size.width(),
        center_y,
        inset.x(),
    ));

    let r = metrics::CORNER_RADIUS;
    let loop_top = metrics::LOOP_HEIGHT / 4;
    let left_x = metrics::JUNCTION;
    let right_x = size.width() - metrics::JUNCTION;
    let riser_length = center_y.saturating_sub(loop_top + r);
    push_vertical(&mut connectors, left_x, loop_top + r, riser_length);
    push_curve(&mut connectors, left_x + r, loop_top + r, r, Quadrant::TopLeft);
    push_horizontal(
        &mut connectors,
        left_x + r,
        loop_top,
        size.width() - 2 * (left_x + r),
    );
    push_curve(&mut connectors, right_x - r, loop_top + r, r, Quadrant::TopRight);
    push_vertical(&mut connectors, right_x, loop_top + r, riser_length);

    Geometry {
        size,
        children: vec![Positioned {
            offset: inset,
            geometry: position_node(body, body_measured),
        }],
        connectors,
        markers: vec![Marker::new(
            LOOP_ARROW_GLYPH,
            Point::new(left_x, (loop_top + center_y) / 2),
        )],
    }
}

/// Corner radius for a bend spanning `d` units vertically; tiny rows get a
/// tighter bend instead of arcs taller than the row gap.
fn bend_radius(d: u32) -> u32 {
    metrics::CORNER_RADIUS.min(d / 2)
}

fn push_horizontal(out: &mut Vec<Connector>, x: u32, y: u32, length: u32) {
    if length > 0 {
        out.push(Connector::horizontal(x, y, length));
    }
}

fn push_vertical(out: &mut Vec<Connector>, x: u32, y: u32, length: u32) {
    if length > 0 {
        out.push(Connector::vertical(x, y, length));
    }
}

fn push_curve(out: &mut Vec<Connector>, x: u32, y: u32, radius: u32, quadrant: Quadrant) {
    if radius > 0 {
        out.push(Connector::curve(x, y, radius, quadrant));
    }
}
