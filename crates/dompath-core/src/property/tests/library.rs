use crate::property::{
    has_any_of_classes, has_attribute, has_children, has_class, has_class_containing,
    has_classes, has_id, has_no_children, has_none_of_the_classes, has_role, has_some_text,
    has_text, has_text_containing, has_text_ending_with, has_text_starting_with,
    is_hidden_with_inline_styling, is_last_sibling, is_nth_from_last_sibling, is_nth_sibling,
    is_only_child, is_with_index, with_index_in_range,
};

#[test]
fn class_conditions() {
    assert_eq!(
        has_class("active").xpath(),
        "contains(concat(' ', normalize-space(@class), ' '), ' active ')"
    );
    assert_eq!(has_class("active").to_string(), "has class 'active'");

    assert_eq!(has_classes(&["a", "b"]).to_string(), "has classes [a, b]");
    assert!(has_classes(&["a", "b"]).xpath().contains(" and "));

    assert_eq!(
        has_any_of_classes(&["a", "b"]).to_string(),
        "has at least one of the classes: [a, b]"
    );
    assert!(has_any_of_classes(&["a", "b"]).xpath().contains(" or "));

    assert_eq!(
        has_none_of_the_classes(&["a", "b"]).to_string(),
        "has none of the classes: [a, b]"
    );
    assert!(has_none_of_the_classes(&["a", "b"]).xpath().starts_with("not("));

    assert_eq!(
        has_class_containing("btn").to_string(),
        "has class containing 'btn'"
    );
    assert_eq!(has_class_containing("btn").xpath(), "contains(@class, 'btn')");
}

#[test]
fn attribute_conditions() {
    assert_eq!(has_attribute("href", "/home").xpath(), "@href='/home'");
    assert_eq!(has_attribute("href", "/home").to_string(), "has href: /home");
    assert_eq!(has_id("main").xpath(), "@id='main'");
    assert_eq!(has_id("main").to_string(), "has id: main");
    assert_eq!(has_role("menu").xpath(), "@role='menu'");
}

#[test]
fn text_conditions_preserve_case_in_the_description_only() {
    let property = has_text("Hello World");

    assert_eq!(property.to_string(), "has the text \"Hello World\"");
    assert!(property.xpath().contains("'hello world'"));
    assert!(!property.xpath().contains("Hello"));

    assert_eq!(
        has_text_containing("Err").to_string(),
        "has text containing \"Err\""
    );
    assert_eq!(
        has_text_starting_with("Warn").to_string(),
        "has text that starts with \"Warn\""
    );
    assert_eq!(
        has_text_ending_with("!").to_string(),
        "has text that ends with \"!\""
    );
    assert_eq!(has_some_text().xpath(), "string-length(text()) > 0");
}

#[test]
fn position_conditions() {
    assert_eq!(is_with_index(3).xpath(), "position()=3");
    assert_eq!(is_with_index(3).to_string(), "with index 3");
    assert_eq!(
        with_index_in_range(2, 5).xpath(),
        "position()>=2 and position()<=5"
    );
    assert_eq!(
        with_index_in_range(2, 5).to_string(),
        "with index from 2 to 5"
    );
    assert_eq!(is_nth_sibling(4).xpath(), "count(preceding-sibling::*)=4");
    assert_eq!(
        is_nth_from_last_sibling(1).xpath(),
        "count(following-sibling::*)=1"
    );
    assert_eq!(is_last_sibling().xpath(), "last()");
    assert_eq!(
        is_only_child().xpath(),
        "count(preceding-sibling::*)=0 and count(following-sibling::*)=0"
    );
}

#[test]
fn child_presence_conditions() {
    assert_eq!(has_no_children().xpath(), "count(./*)=0");
    assert_eq!(has_children().xpath(), "count(./*)>0");
    assert_eq!(has_children().to_string(), "has some children");
}

#[test]
fn inline_style_visibility() {
    let property = is_hidden_with_inline_styling();

    assert_eq!(property.to_string(), "is hidden");
    assert!(property.xpath().contains("display:none"));
    assert!(property.xpath().contains("display: none"));
}
