//! Module: path
//! Responsibility: the immutable path value type, relation combinators with
//! the primary/alternate encoding choice, positional selection, and the
//! synchronized description rendering.
//! Does not own: condition fragments or the property factory catalog.

mod basic;
mod display;
mod index;
mod relation;

#[cfg(test)]
mod tests;

pub use basic::{Path, custom_element};
pub use index::{
    ChildIndex, Occurrence, child_number, first_occurrence_of, last_occurrence_of,
    occurrence_number,
};
pub use relation::anything_except;

pub(crate) use display::wrapped_description;
pub(crate) use relation::transformed_xpath;
