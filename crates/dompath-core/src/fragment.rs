//! Pure XPath condition-fragment generators.
//!
//! Every function here is a stateless projection from typed parameters to a
//! fragment of XPath text. Text comparisons are lower-cased on both sides;
//! the paired human descriptions (built elsewhere) preserve original case.

use crate::count::CountOp;

/// Upper-to-lower `translate()` wrapper around an XPath string expression.
#[must_use]
pub fn lower_cased(expr: &str) -> String {
    format!("translate({expr}, 'ABCDEFGHIJKLMNOPQRSTUVWXYZ', 'abcdefghijklmnopqrstuvwxyz')")
}

/// Condition: the element's own text equals `text` (case-insensitive).
#[must_use]
pub fn text_equals(text: &str) -> String {
    format!("{} = '{}'", lower_cased("text()"), text.to_lowercase())
}

/// Condition: the element's own text contains `text` (case-insensitive).
#[must_use]
pub fn text_contains(text: &str) -> String {
    format!("contains({}, '{}')", lower_cased("text()"), text.to_lowercase())
}

/// Condition: the element's own text starts with `prefix` (case-insensitive).
#[must_use]
pub fn text_starts_with(prefix: &str) -> String {
    format!(
        "starts-with({}, '{}')",
        lower_cased("text()"),
        prefix.to_lowercase()
    )
}

/// Condition: the element's own text ends with `suffix` (case-insensitive).
#[must_use]
pub fn text_ends_with(suffix: &str) -> String {
    format!(
        "substring({}, string-length(text()) - string-length('{suffix}') + 1) = '{}'",
        lower_cased("text()"),
        suffix.to_lowercase()
    )
}

const AGGREGATED_TEXT: &str = "normalize-space(string(.))";

/// Condition: the element's aggregated (deep) text equals `text`.
#[must_use]
pub fn aggregated_text_equals(text: &str) -> String {
    format!("{} = '{}'", lower_cased(AGGREGATED_TEXT), text.to_lowercase())
}

/// Condition: the element's aggregated (deep) text contains `text`.
#[must_use]
pub fn aggregated_text_contains(text: &str) -> String {
    format!(
        "contains({}, '{}')",
        lower_cased(AGGREGATED_TEXT),
        text.to_lowercase()
    )
}

/// Condition: the element's aggregated (deep) text starts with `prefix`.
#[must_use]
pub fn aggregated_text_starts_with(prefix: &str) -> String {
    format!(
        "starts-with({}, '{}')",
        lower_cased(AGGREGATED_TEXT),
        prefix.to_lowercase()
    )
}

/// Condition: the element's aggregated (deep) text ends with `suffix`.
#[must_use]
pub fn aggregated_text_ends_with(suffix: &str) -> String {
    format!(
        "substring({}, string-length({AGGREGATED_TEXT}) - string-length('{suffix}') + 1) = '{}'",
        lower_cased(AGGREGATED_TEXT),
        suffix.to_lowercase()
    )
}

/// Condition: `string-length(text()) > 0`.
pub const HAS_SOME_TEXT: &str = "string-length(text()) > 0";

/// Condition: the element carries `class_name` as a whole class token.
#[must_use]
pub fn has_class(class_name: &str) -> String {
    format!("contains(concat(' ', normalize-space(@class), ' '), ' {class_name} ')")
}

/// Condition: the `class` attribute contains `substring` anywhere.
#[must_use]
pub fn has_class_containing(substring: &str) -> String {
    format!("contains(@class, '{substring}')")
}

/// Condition: the element carries every one of `class_names`.
#[must_use]
pub fn has_classes<S: AsRef<str>>(class_names: &[S]) -> String {
    join_class_conditions("and", class_names)
}

/// Condition: the element carries at least one of `class_names`.
#[must_use]
pub fn has_any_of_classes<S: AsRef<str>>(class_names: &[S]) -> String {
    join_class_conditions("or", class_names)
}

fn join_class_conditions<S: AsRef<str>>(op: &str, class_names: &[S]) -> String {
    class_names
        .iter()
        .map(|name| has_class(name.as_ref()))
        .collect::<Vec<_>>()
        .join(&format!(" {op} "))
}

/// Condition: attribute equality, `@attr='value'`.
#[must_use]
pub fn has_attribute(attribute: &str, value: &str) -> String {
    format!("@{attribute}='{value}'")
}

/// Wrap a condition in `not(...)`.
#[must_use]
pub fn does_not_exist(condition: &str) -> String {
    format!("not({condition})")
}

/// Document-level absence check, anchored at the `html` root.
#[must_use]
pub fn does_not_exist_in_entire_page(xpath: &str) -> String {
    let processed = if let Some(rest) = xpath.strip_prefix("(/") {
        format!("(./{rest}")
    } else if xpath.starts_with("//") {
        format!(".{xpath}")
    } else {
        format!(".//{xpath}")
    };

    format!("/html[not({processed})]")
}

/// Counted condition, `count(<expr>)<sym><n>`.
#[must_use]
pub fn counted(expr: &str, n: u32, op: CountOp) -> String {
    format!("count({expr}){}{n}", op.symbol())
}

/// Inline-style visibility check.
pub const IS_HIDDEN: &str =
    "contains(@style, 'display:none') or contains(normalize-space(@style), 'display: none')";

/// Anchor an xpath at the top of the document (`//`-prefixed), preserving
/// an existing anchor and any wrapping parenthesis.
#[must_use]
pub fn inside_top_level(xpath: &str) -> String {
    let already_anchored = xpath.trim_start_matches('(').starts_with("//");

    if already_anchored {
        xpath.to_string()
    } else if let Some(rest) = xpath.strip_prefix('(') {
        format!("(//{rest}")
    } else {
        format!("//{xpath}")
    }
}
