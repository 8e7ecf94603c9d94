use crate::{
    error::PathError,
    path::{child_number, custom_element, first_occurrence_of, last_occurrence_of,
        occurrence_number},
    property::has_class,
};

#[test]
fn at_index_filters_among_like_named_siblings() {
    let div = custom_element("div");

    let third = div.at_index(3).unwrap();

    assert_eq!(third.query_string(), "div[3]");
    assert_eq!(third.describe(), "child number 3 of type div");
}

#[test]
fn at_index_zero_is_rejected() {
    let div = custom_element("div");

    assert_eq!(
        div.at_index(0).unwrap_err(),
        PathError::NonPositiveIndex { index: 0 }
    );
    assert!(child_number(0).of_type(&div).is_err());
}

#[test]
fn child_number_keeps_condition_clauses_inside_the_position() {
    let li = custom_element("li").that(has_class("x"));

    let second = child_number(2).of_type(&li).unwrap();

    assert_eq!(
        second.query_string(),
        "li[contains(concat(' ', normalize-space(@class), ' '), ' x ')][2]"
    );
}

#[test]
fn occurrence_selection_is_global() {
    let div = custom_element("div");

    assert_eq!(
        occurrence_number(1).of(&div).unwrap().query_string(),
        "(//div)[1]"
    );
    assert_eq!(
        occurrence_number(1).of(&div).unwrap().describe(),
        "the first occurrence of div"
    );
    assert_eq!(
        occurrence_number(0).of(&div).unwrap().query_string(),
        "(//div)[last()]"
    );
    assert_eq!(
        occurrence_number(0).of(&div).unwrap().describe(),
        "the last occurrence of div"
    );
    assert_eq!(
        occurrence_number(3).of(&div).unwrap().describe(),
        "occurrence number 3 of div"
    );
}

#[test]
fn occurrence_of_an_alternation_selects_across_the_union() {
    let h1 = custom_element("h1");
    let h2 = custom_element("h2");
    let header = h1.or(&h2).unwrap();

    assert_eq!(
        occurrence_number(0).of(&header).unwrap().query_string(),
        "(//*[self::h1 | self::h2])[last()]"
    );
    assert_eq!(
        occurrence_number(1).of(&header).unwrap().query_string(),
        "(//*[self::h1 | self::h2])[1]"
    );
}

#[test]
fn occurrence_of_a_parenthesized_path_does_not_reanchor() {
    let div = custom_element("div");
    let first = first_occurrence_of(&div).unwrap();

    assert_eq!(
        occurrence_number(2).of(&first).unwrap().query_string(),
        "((//div)[1])[2]"
    );
}

#[test]
fn first_and_last_helpers() {
    let div = custom_element("div");

    assert_eq!(
        first_occurrence_of(&div).unwrap(),
        occurrence_number(1).of(&div).unwrap()
    );
    assert_eq!(
        last_occurrence_of(&div).unwrap(),
        occurrence_number(0).of(&div).unwrap()
    );
}

#[test]
fn global_index_is_zero_based() {
    let div = custom_element("div");

    assert_eq!(
        div.with_global_index(0).unwrap(),
        first_occurrence_of(&div).unwrap()
    );
    assert_eq!(
        div.with_global_index(4).unwrap().query_string(),
        "(//div)[5]"
    );
}

#[test]
fn occurrence_wraps_a_multiword_description() {
    let li = custom_element("li").described_by("list item");

    assert_eq!(
        last_occurrence_of(&li).unwrap().describe(),
        "the last occurrence of (list item)"
    );
}

#[test]
fn occurrence_requires_a_fragment() {
    let root = custom_element("");

    assert_eq!(
        occurrence_number(1).of(&root).unwrap_err(),
        PathError::MissingTargetFragment
    );
}
