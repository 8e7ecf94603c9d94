//! Built-in named-element catalog: pre-built root paths for the common
//! HTML tags, all constructed from the same `custom_element` primitive the
//! core exposes.

use dompath_core::path::{Path, custom_element};
use std::sync::LazyLock;

fn named(tag: &str, description: &str) -> Path {
    custom_element(tag).described_by(description)
}

/// Any element (`*`).
pub static ELEMENT: LazyLock<Path> = LazyLock::new(|| named("*", "any element"));

pub static DIV: LazyLock<Path> = LazyLock::new(|| custom_element("div"));
pub static SPAN: LazyLock<Path> = LazyLock::new(|| custom_element("span"));
pub static SECTION: LazyLock<Path> = LazyLock::new(|| custom_element("section"));
pub static IMG: LazyLock<Path> = LazyLock::new(|| custom_element("img"));
pub static BUTTON: LazyLock<Path> = LazyLock::new(|| custom_element("button"));

pub static LI: LazyLock<Path> = LazyLock::new(|| named("li", "list item"));
pub static UL: LazyLock<Path> = LazyLock::new(|| named("ul", "unordered list"));
pub static OL: LazyLock<Path> = LazyLock::new(|| named("ol", "ordered list"));
pub static SELECT: LazyLock<Path> = LazyLock::new(|| named("select", "selection menu"));
pub static OPTION: LazyLock<Path> = LazyLock::new(|| custom_element("option"));
pub static LABEL: LazyLock<Path> = LazyLock::new(|| custom_element("label"));

pub static FORM: LazyLock<Path> = LazyLock::new(|| custom_element("form"));
pub static INPUT: LazyLock<Path> = LazyLock::new(|| custom_element("input"));
pub static TITLE: LazyLock<Path> = LazyLock::new(|| custom_element("title"));
pub static IFRAME: LazyLock<Path> = LazyLock::new(|| custom_element("iframe"));

pub static HTML: LazyLock<Path> = LazyLock::new(|| named("html", "document"));
pub static BODY: LazyLock<Path> = LazyLock::new(|| named("body", "document body"));

pub static TABLE: LazyLock<Path> = LazyLock::new(|| custom_element("table"));
pub static TD: LazyLock<Path> = LazyLock::new(|| named("td", "table cell"));
pub static TR: LazyLock<Path> = LazyLock::new(|| named("tr", "table row"));
pub static TH: LazyLock<Path> = LazyLock::new(|| named("th", "table header"));

pub static HEADER1: LazyLock<Path> = LazyLock::new(|| named("h1", "header-1"));
pub static HEADER2: LazyLock<Path> = LazyLock::new(|| named("h2", "header-2"));
pub static HEADER3: LazyLock<Path> = LazyLock::new(|| named("h3", "header-3"));
pub static HEADER4: LazyLock<Path> = LazyLock::new(|| named("h4", "header-4"));
pub static HEADER5: LazyLock<Path> = LazyLock::new(|| named("h5", "header-5"));
pub static HEADER6: LazyLock<Path> = LazyLock::new(|| named("h6", "header-6"));

/// Any of `h1`..`h6`.
pub static HEADER: LazyLock<Path> = LazyLock::new(|| {
    HEADER1
        .or(&HEADER2)
        .and_then(|header| header.or(&HEADER3))
        .and_then(|header| header.or(&HEADER4))
        .and_then(|header| header.or(&HEADER5))
        .and_then(|header| header.or(&HEADER6))
        .expect("header tags must carry xpath fragments")
});

#[cfg(test)]
mod tests {
    use super::*;
    use dompath_core::property::has_class;

    #[test]
    fn named_elements_carry_their_descriptions() {
        assert_eq!(TD.describe(), "table cell");
        assert_eq!(TR.query_string(), "tr");
        assert_eq!(ELEMENT.query_string(), "*");
        assert_eq!(ELEMENT.describe(), "any element");
    }

    #[test]
    fn catalog_roots_compose_like_any_path() {
        let item = LI.child_of(&UL).unwrap();

        assert_eq!(item.query_string(), "ul/child::li");
        assert_eq!(item.describe(), "list item, child (unordered list)");

        let cell = TD.that(has_class("selected"));
        assert_eq!(cell.describe(), "table cell that has class 'selected'");
    }

    #[test]
    fn header_matches_any_heading_level() {
        let query = HEADER.query_string();

        for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert!(query.contains(&format!("self::{tag}")), "missing {tag}");
        }
    }
}
