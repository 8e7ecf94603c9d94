//! Factory catalog of named element properties.
//!
//! Each factory pairs a fragment from [`crate::fragment`] with the matching
//! description. Text comparisons are case-insensitive in the fragment while
//! the description preserves the caller's original casing.

use crate::fragment;
use crate::property::ast::{CountedProperty, Property};

/// The element carries `class_name` as a whole class token.
#[must_use]
pub fn has_class(class_name: &str) -> Property {
    Property::new(
        fragment::has_class(class_name),
        format!("has class '{class_name}'"),
    )
}

/// The element carries every one of `class_names`.
#[must_use]
pub fn has_classes(class_names: &[&str]) -> Property {
    Property::new(
        fragment::has_classes(class_names),
        format!("has classes [{}]", class_names.join(", ")),
    )
}

/// The element carries at least one of `class_names`.
#[must_use]
pub fn has_any_of_classes(class_names: &[&str]) -> Property {
    Property::new(
        fragment::has_any_of_classes(class_names),
        format!(
            "has at least one of the classes: [{}]",
            class_names.join(", ")
        ),
    )
}

/// The element carries none of `class_names`.
#[must_use]
pub fn has_none_of_the_classes(class_names: &[&str]) -> Property {
    Property::new(
        fragment::does_not_exist(&fragment::has_any_of_classes(class_names)),
        format!("has none of the classes: [{}]", class_names.join(", ")),
    )
}

/// The `class` attribute contains `class_substring` anywhere.
#[must_use]
pub fn has_class_containing(class_substring: &str) -> Property {
    Property::new(
        fragment::has_class_containing(class_substring),
        format!("has class containing '{class_substring}'"),
    )
}

/// Attribute equality.
#[must_use]
pub fn has_attribute(attribute: &str, value: &str) -> Property {
    Property::new(
        fragment::has_attribute(attribute, value),
        format!("has {attribute}: {value}"),
    )
}

#[must_use]
pub fn has_id(id: &str) -> Property {
    has_attribute("id", id)
}

#[must_use]
pub fn has_name(name: &str) -> Property {
    has_attribute("name", name)
}

#[must_use]
pub fn has_role(role: &str) -> Property {
    has_attribute("role", role)
}

#[must_use]
pub fn is_last_sibling() -> Property {
    Property::new("last()", "is last sibling")
}

#[must_use]
pub fn is_only_child() -> Property {
    Property::new(
        "count(preceding-sibling::*)=0 and count(following-sibling::*)=0",
        "is only child",
    )
}

/// Hidden through inline styling (`display:none`).
#[must_use]
pub fn is_hidden_with_inline_styling() -> Property {
    Property::new(fragment::IS_HIDDEN, "is hidden")
}

#[must_use]
pub fn has_some_text() -> Property {
    Property::new(fragment::HAS_SOME_TEXT, "has some text")
}

/// Child-count condition; refine with `.exactly()`, `.or_more()`, or
/// `.or_less()`, or use directly for the exact count.
#[must_use]
pub fn has_n_children(n: u32) -> CountedProperty {
    CountedProperty::new(
        n,
        format!("count(./*)={n}"),
        format!("has {n} children"),
    )
}

#[must_use]
pub fn has_no_children() -> Property {
    Property::new("count(./*)=0", "has no children")
}

#[must_use]
pub fn has_children() -> Property {
    Property::new("count(./*)>0", "has some children")
}

/// Position counted from the last sibling (0 is the last).
#[must_use]
pub fn is_nth_from_last_sibling(reverse_index: u32) -> Property {
    Property::new(
        format!("count(following-sibling::*)={reverse_index}"),
        format!("is in place {reverse_index} from the last sibling"),
    )
}

/// Position counted from the first sibling (0 is the first).
#[must_use]
pub fn is_nth_sibling(index: u32) -> Property {
    Property::new(
        format!("count(preceding-sibling::*)={index}"),
        format!("is in place {index} among its siblings"),
    )
}

#[must_use]
pub fn is_with_index(index: u32) -> Property {
    Property::new(format!("position()={index}"), format!("with index {index}"))
}

#[must_use]
pub fn with_index_in_range(first: u32, last: u32) -> Property {
    Property::new(
        format!("position()>={first} and position()<={last}"),
        format!("with index from {first} to {last}"),
    )
}

/// The element's own text equals `text` (case-insensitive).
#[must_use]
pub fn has_text(text: &str) -> Property {
    Property::new(
        fragment::text_equals(text),
        format!("has the text \"{text}\""),
    )
}

#[must_use]
pub fn has_text_starting_with(text: &str) -> Property {
    Property::new(
        fragment::text_starts_with(text),
        format!("has text that starts with \"{text}\""),
    )
}

#[must_use]
pub fn has_text_ending_with(text: &str) -> Property {
    Property::new(
        fragment::text_ends_with(text),
        format!("has text that ends with \"{text}\""),
    )
}

#[must_use]
pub fn has_text_containing(text: &str) -> Property {
    Property::new(
        fragment::text_contains(text),
        format!("has text containing \"{text}\""),
    )
}

/// The element's aggregated (deep) text equals `text`.
#[must_use]
pub fn has_aggregated_text_equal_to(text: &str) -> Property {
    Property::new(
        fragment::aggregated_text_equals(text),
        format!("has aggregated text \"{text}\""),
    )
}

#[must_use]
pub fn has_aggregated_text_containing(text: &str) -> Property {
    Property::new(
        fragment::aggregated_text_contains(text),
        format!("has aggregated text containing \"{text}\""),
    )
}

#[must_use]
pub fn has_aggregated_text_starting_with(text: &str) -> Property {
    Property::new(
        fragment::aggregated_text_starts_with(text),
        format!("has aggregated text starting with \"{text}\""),
    )
}

#[must_use]
pub fn has_aggregated_text_ending_with(text: &str) -> Property {
    Property::new(
        fragment::aggregated_text_ends_with(text),
        format!("has aggregated text ending with \"{text}\""),
    )
}
