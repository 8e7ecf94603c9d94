//! Core engine for dompath: the immutable path expression model, the
//! property (condition) algebra, pure XPath fragment generation, and the
//! lockstep natural-language descriptions.
//!
//! Everything here is a plain value: combinators never mutate their
//! receiver, rendering is a pure projection, and failures surface at the
//! composing call, never at render time.

pub mod axis;
pub mod count;
pub mod error;
pub mod fragment;
pub mod path;
pub mod property;

///
/// Prelude
///
/// The composition vocabulary: path roots, combinator entry points, the
/// property catalog, and counting qualifiers.
///

pub mod prelude {
    pub use crate::{
        axis::Axis,
        count::{CountOp, OccurrenceBound, Occurrences, at_least, at_most, exactly},
        error::PathError,
        path::{
            Path, anything_except, child_number, custom_element, first_occurrence_of,
            last_occurrence_of, occurrence_number,
        },
        property::{
            CountedProperty, Property, RelationTarget, contains, has_aggregated_text_containing,
            has_aggregated_text_ending_with, has_aggregated_text_equal_to,
            has_aggregated_text_starting_with, has_ancestor, has_any_of_classes, has_attribute,
            has_child, has_children, has_class, has_class_containing, has_classes, has_descendant,
            has_id, has_n_children, has_name, has_no_children, has_none_of_the_classes,
            has_parent, has_role, has_some_text, has_text, has_text_containing,
            has_text_ending_with, has_text_starting_with, is_after, is_after_sibling,
            is_ancestor_of, is_before, is_before_sibling, is_child_of, is_contained_in,
            is_descendant_of, is_hidden_with_inline_styling, is_inside, is_last_sibling,
            is_nth_from_last_sibling, is_nth_sibling, is_only_child, is_parent_of, is_sibling_of,
            is_with_index, not, with_index_in_range,
        },
    };
}
