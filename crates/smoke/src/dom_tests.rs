// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn inventory() -> Element {
    Element::new("host").child(
        Element::new("section")
            .id("inventory")
            .child(Element::new("h2").text("Inventory"))
            .child(
                Element::new("ul").class("items").children([
                    Element::new("li").class("item").text("Lamp"),
                    Element::new("li").class("item").class("sold").text("Chair"),
                    Element::new("li")
                        .class("item")
                        .child(Element::new("span").text("Rug")),
                ]),
            )
            .child(
                Element::new("form")
                    .child(Element::new("input").id("price").attr("type", "number"))
                    .child(Element::new("button").attr("type", "submit").text("Save")),
            ),
    )
}

// =========================================================================
// Builders and accessors
// =========================================================================

#[test]
fn test_class_builder_appends() {
    let el = Element::new("li").class("item").class("sold");
    assert_eq!(el.attr_value("class"), Some("item sold"));
    assert!(el.has_class("item"));
    assert!(el.has_class("sold"));
    assert!(!el.has_class("it"));
}

#[test]
fn test_id_and_value_are_attributes() {
    let el = Element::new("input").id("price").value("12.50");
    assert_eq!(el.get_id(), Some("price"));
    assert_eq!(el.attr_value("id"), Some("price"));
    assert_eq!(el.get_value(), Some("12.50"));
}

#[test]
fn test_attr_if() {
    let enabled = Element::new("button").attr_if(false, "disabled", "");
    let disabled = Element::new("button").attr_if(true, "disabled", "");
    assert_eq!(enabled.attr_value("disabled"), None);
    assert_eq!(disabled.attr_value("disabled"), Some(""));
}

#[rstest]
fn test_text_content_is_recursive(inventory: Element) {
    let list = inventory.query_selector("ul").unwrap().unwrap();
    assert_eq!(list.text_content(), "LampChairRug");
    assert_eq!(list.own_text(), "");
}

#[rstest]
#[case("input", true)]
#[case("TEXTAREA", true)]
#[case("select", true)]
#[case("button", false)]
#[case("div", false)]
fn test_is_input(#[case] tag: &str, #[case] expected: bool) {
    assert_eq!(Element::new(tag).is_input(), expected);
}

// =========================================================================
// Queries
// =========================================================================

#[rstest]
fn test_query_selector_returns_first_in_document_order(inventory: Element) {
    let first = inventory.query_selector(".item").unwrap().unwrap();
    assert_eq!(first.own_text(), "Lamp");
}

#[rstest]
fn test_query_selector_all_preserves_order(inventory: Element) {
    let items = inventory.query_selector_all("li.item").unwrap();
    let texts: Vec<String> = items.iter().map(|el| el.text_content()).collect();
    assert_eq!(texts, ["Lamp", "Chair", "Rug"]);
}

#[rstest]
fn test_query_selector_missing(inventory: Element) {
    assert_eq!(inventory.query_selector(".archived").unwrap(), None);
    assert!(inventory.query_selector_all(".archived").unwrap().is_empty());
}

#[rstest]
fn test_query_excludes_root(inventory: Element) {
    assert_eq!(inventory.query_selector("host").unwrap(), None);
}

#[rstest]
fn test_query_root_participates_as_ancestor(inventory: Element) {
    let sections = inventory.query_selector_all("host > section").unwrap();
    assert_eq!(sections.len(), 1);
}

#[rstest]
fn test_query_with_combinators(inventory: Element) {
    assert_eq!(inventory.query_selector_all("#inventory li").unwrap().len(), 3);
    assert_eq!(inventory.query_selector_all("ul > span").unwrap().len(), 0);
    assert_eq!(inventory.query_selector_all("ul span").unwrap().len(), 1);
    let submit = inventory
        .query_selector("form [type=submit]")
        .unwrap()
        .unwrap();
    assert_eq!(submit.own_text(), "Save");
}

#[rstest]
fn test_query_invalid_selector(inventory: Element) {
    assert_eq!(
        inventory.query_selector("ul >"),
        Err(SelectorError::Incomplete("ul >".to_string()))
    );
}

#[rstest]
fn test_select_first_mut_edits_in_place(mut inventory: Element) {
    let selector = Selector::parse("#price").unwrap();
    inventory
        .select_first_mut(&selector)
        .unwrap()
        .set_value("40");
    let price = inventory.query_selector("#price").unwrap().unwrap();
    assert_eq!(price.get_value(), Some("40"));
}

#[rstest]
fn test_select_first_mut_follows_document_order(mut inventory: Element) {
    let selector = Selector::parse("li").unwrap();
    let first = inventory.select_first_mut(&selector).unwrap();
    assert_eq!(first.own_text(), "Lamp");
}
