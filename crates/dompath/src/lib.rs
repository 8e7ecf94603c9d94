//! dompath — a fluent, immutable XPath builder for locating elements in
//! HTML documents.
//!
//! ## Crate layout
//! - `core`: the expression model, property algebra, fragment generators,
//!   and description rendering.
//! - `elements`: the built-in named-element catalog.
//!
//! The `prelude` module mirrors the vocabulary used inside test code:
//! element roots, property factories, and combinator entry points.

pub use dompath_core as core;

pub mod elements;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dompath_core::{error::PathError, path::Path, property::Property};

///
/// Prelude
///
/// Composition vocabulary only; rendering stays behind explicit calls on
/// `Path`.
///

pub mod prelude {
    pub use crate::elements::*;
    pub use dompath_core::prelude::*;
}
