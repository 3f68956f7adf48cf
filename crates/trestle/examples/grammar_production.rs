//! Example: Laying out a grammar production
//!
//! This example demonstrates how to build a railroad diagram tree with the
//! builder functions and lay it out against a simple monospace oracle, then
//! walks the resulting geometry the way a renderer adapter would.

use trestle::{
    Connector, Geometry, Node, Point, Size, choice, layout, leaf, optional, repeat_one_or_more,
    sequence,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building production...\n");

    // value := "[" [ element { "," element } ] "]"
    let element = choice(["string", "number", "value"])?;
    let production = sequence([
        leaf("["),
        optional(sequence([
            element.clone(),
            repeat_one_or_more(sequence([leaf(","), element])?),
        ])?),
        leaf("]"),
    ])?;

    // A renderer adapter would attach content to a live surface and read
    // back its intrinsic size; a fixed-pitch estimate stands in here.
    let geometry = layout(&production, |text: &str| {
        Size::new(8 * text.len() as u32, 12)
    })?;

    println!(
        "Diagram occupies {}x{} units",
        geometry.size().width(),
        geometry.size().height()
    );

    println!("\nPaint plan:");
    paint(&production, &geometry, Point::new(0, 0), 0);

    Ok(())
}

/// Walks the node and geometry trees in lockstep, printing what a renderer
/// would paint, with offsets accumulated into absolute coordinates.
fn paint(node: &Node, geometry: &Geometry, origin: Point, depth: usize) {
    let indent = "  ".repeat(depth);

    if let Node::Leaf(leaf) = node {
        println!(
            "{indent}leaf {:?} at ({}, {}), {}x{}",
            leaf.text(),
            origin.x(),
            origin.y(),
            geometry.size().width(),
            geometry.size().height()
        );
        return;
    }

    for connector in geometry.connectors() {
        match *connector {
            Connector::Straight {
                x,
                y,
                length,
                horizontal,
            } => println!(
                "{indent}line at ({}, {}), {} units {}",
                origin.x() + x,
                origin.y() + y,
                length,
                if horizontal { "right" } else { "down" },
            ),
            Connector::Curve {
                x, y, radius, quadrant,
            } => println!(
                "{indent}arc centred at ({}, {}), radius {}, {:?}",
                origin.x() + x,
                origin.y() + y,
                radius,
                quadrant,
            ),
        }
    }
    for marker in geometry.markers() {
        println!(
            "{indent}glyph {:?} at ({}, {})",
            marker.glyph(),
            origin.x() + marker.offset().x(),
            origin.y() + marker.offset().y(),
        );
    }

    let children: &[Node] = match node {
        Node::Leaf(_) => &[],
        Node::Sequence(children) | Node::Choice(children) => children,
        Node::Repeat(body) => std::slice::from_ref(body.as_ref()),
    };
    for (child, placed) in children.iter().zip(geometry.children()) {
        paint(
            child,
            placed.geometry(),
            origin.add_point(placed.offset()),
            depth + 1,
        );
    }
}
