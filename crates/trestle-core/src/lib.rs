//! Trestle Core Types and Definitions
//!
//! This crate provides the foundational types for the Trestle railroad
//! diagram engine. It includes:
//!
//! - **Geometry**: Integer-unit geometric types ([`geometry`] module)
//! - **Node model**: The canonical diagram tree ([`node`] module)
//! - **Draw**: Renderer-agnostic paint primitives ([`draw`] module)

pub mod draw;
pub mod geometry;
pub mod node;
