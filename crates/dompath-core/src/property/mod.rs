//! Module: property
//! Responsibility: boolean element conditions, their logical algebra, and
//! the factory catalog over fragment generators.
//! Does not own: path composition or relation-axis encoding choices.

mod ast;
mod library;
mod relation;

#[cfg(test)]
mod tests;

pub use ast::{CountedProperty, Property, not};
pub use library::*;
pub use relation::{
    RelationTarget, contains, has_ancestor, has_child, has_descendant, has_parent,
    is_after, is_after_sibling, is_ancestor_of, is_before, is_before_sibling, is_child_of,
    is_contained_in, is_descendant_of, is_inside, is_parent_of, is_sibling_of,
};
