//! Trestle: railroad syntax diagrams from a declarative node algebra.
//!
//! A diagram is composed with the builder functions ([`sequence`],
//! [`choice`], [`optional`], [`repeat_one_or_more`], [`repeat_zero_or_more`]),
//! which normalize arbitrarily nested calls into a canonical tree, and laid
//! out with [`layout`], which needs only a measurement oracle for leaf
//! content and returns a renderer-agnostic [`Geometry`] tree of sizes,
//! child offsets, connectors and markers.
//!
//! ```
//! use trestle::{Size, choice, layout, leaf, optional, sequence};
//!
//! let production = sequence([
//!     leaf("SELECT"),
//!     optional("DISTINCT"),
//!     choice(["*", "column"])?,
//! ])?;
//!
//! // Any closure reporting intrinsic content sizes works as the oracle.
//! let geometry = layout(&production, |text: &str| {
//!     Size::new(8 * text.len() as u32, 12)
//! })?;
//! assert!(!geometry.size().is_zero());
//! # Ok::<(), trestle::TrestleError>(())
//! ```
//!
//! Painting is left to a renderer adapter: walk the node and geometry trees
//! in lockstep, accumulate child offsets, and draw each leaf's content,
//! connector primitive and marker glyph with the toolkit of your choice.

pub mod builder;
pub mod error;
pub mod layout;

pub use builder::{choice, leaf, optional, repeat_one_or_more, repeat_zero_or_more, sequence};
pub use error::TrestleError;
pub use layout::{Geometry, Measure, Positioned, layout};
pub use trestle_core::{
    draw::{Connector, Marker, Quadrant},
    geometry::{Point, Size},
    node::{Leaf, Node},
};
