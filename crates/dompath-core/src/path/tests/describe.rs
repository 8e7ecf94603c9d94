use crate::{
    path::{Path, custom_element},
    property::{has_class, has_some_text, is_with_index},
};

#[test]
fn single_condition_starting_with_has_gets_a_that_connective() {
    let path = custom_element("div").that(has_class("active"));

    assert_eq!(
        path.query_string(),
        "div[contains(concat(' ', normalize-space(@class), ' '), ' active ')]"
    );
    assert_eq!(path.describe(), "div that has class 'active'");
}

#[test]
fn single_condition_without_has_or_is_appends_directly() {
    let path = custom_element("div").that(is_with_index(3));

    assert_eq!(path.describe(), "div with index 3");
}

#[test]
fn two_conditions_on_a_single_word_base() {
    let path = custom_element("div")
        .that(has_class("menu"))
        .and(has_some_text());

    assert_eq!(
        path.describe(),
        "div, that has class 'menu', and has some text"
    );
}

#[test]
fn three_conditions_render_as_a_bracketed_list() {
    let path = custom_element("div").that_all([
        has_class("a"),
        has_class("b"),
        has_class("c"),
    ]);

    assert_eq!(
        path.describe(),
        "div, that [has class 'a', has class 'b', has class 'c']"
    );
}

#[test]
fn named_base_keeps_the_simple_form_for_one_condition() {
    let path = custom_element("li")
        .described_by("list item")
        .that(has_class("selected"));

    assert_eq!(path.describe(), "list item that has class 'selected'");
}

#[test]
fn comma_bearing_base_falls_back_to_the_list_form() {
    let ul = custom_element("ul");
    let li = custom_element("li");

    let path = li.child_of(&ul).unwrap().that(has_class("selected"));

    assert_eq!(
        path.describe(),
        "li, child ul, that [has class 'selected']"
    );
}

#[test]
fn with_properties_base_switches_the_connective() {
    let path = custom_element("div")
        .described_by("div with properties [wide]")
        .that(has_class("a"))
        .and(has_class("b"));

    assert_eq!(
        path.describe(),
        "div with properties [wide], and [has class 'a', has class 'b']"
    );
}

#[test]
fn override_wins_verbatim() {
    let path = custom_element("nav").described_by("the navigation bar");

    assert_eq!(path.describe(), "the navigation bar");

    let child = custom_element("a").child_of(&path).unwrap();
    assert_eq!(child.describe(), "a, child (the navigation bar)");
}

#[test]
fn no_conditions_renders_the_base_alone() {
    assert_eq!(custom_element("div").describe(), "div");
}

#[test]
fn unexplained_fragment_falls_back_to_quoted_xpath() {
    let path = Path {
        xpath: "section".to_string(),
        inside: None,
        alternate: None,
        described: None,
        explanation: None,
        properties: Vec::new(),
    };

    assert_eq!(path.describe(), "xpath: \"section\"");
}
