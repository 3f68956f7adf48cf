//! Error types for Trestle operations.
//!
//! This module provides the main error type [`TrestleError`] which wraps
//! the failure conditions of building and laying out a diagram. All
//! variants are fatal for the current call; nothing process-wide is ever
//! left behind, so retrying with fresh input is always safe.

use thiserror::Error;

/// The main error type for Trestle operations.
#[derive(Debug, Error)]
pub enum TrestleError {
    /// A builder call received input it cannot turn into a node, e.g. an
    /// empty argument list. Signals a programming error in the caller.
    #[error("invalid node: {0}")]
    InvalidNode(String),

    /// The layout engine met a tree that violates the builder's
    /// canonical-form guarantees. Such trees can only be built by hand,
    /// bypassing the builder.
    #[error("unsupported node: {0}")]
    UnsupportedNode(String),

    /// The measurement oracle failed; the layout call is aborted.
    #[error("measure error: {0}")]
    Measure(#[source] Box<dyn std::error::Error>),
}
