// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Headless element tree.

use crate::selector::{Selector, SelectorError};
use std::collections::BTreeMap;

const INPUT_TAGS: &[&str] = &["input", "textarea", "select"];

/// One element of a rendered component.
///
/// `id` and `class` are ordinary attributes; the builder methods are
/// shorthands for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Append a class to the `class` attribute
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.attributes
            .entry("class".to_string())
            .and_modify(|existing| {
                existing.push(' ');
                existing.push_str(&class);
            })
            .or_insert_with(|| class.clone());
        self
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when `condition` holds, e.g. `disabled`
    pub fn attr_if(self, condition: bool, name: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    /// Set the element's own text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the `value` attribute (form controls)
    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    /// Append a child
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn get_id(&self) -> Option<&str> {
        self.attr_value("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn get_value(&self) -> Option<&str> {
        self.attr_value("value")
    }

    pub fn own_text(&self) -> &str {
        &self.text
    }

    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// Own text followed by all descendant text, in document order.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Whether this element accepts typed input
    pub fn is_input(&self) -> bool {
        INPUT_TAGS.iter().any(|t| t.eq_ignore_ascii_case(&self.tag))
    }

    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.attributes.insert("value".to_string(), value.into());
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// First descendant matching `selector`, in document order.
    pub fn query_selector(&self, selector: &str) -> Result<Option<&Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.select_first(&selector))
    }

    /// All descendants matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<&Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.select_all(&selector))
    }

    pub fn select_first(&self, selector: &Selector) -> Option<&Element> {
        self.select_path(selector).and_then(|path| self.at_path(&path))
    }

    pub fn select_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut ancestors = vec![self];
        collect_matches(self, selector, &mut ancestors, &mut out);
        out
    }

    /// Mutable access to the first descendant matching `selector`
    pub(crate) fn select_first_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        let path = self.select_path(selector)?;
        self.at_path_mut(&path)
    }

    /// Child-index path from `self` to the first matching descendant.
    fn select_path(&self, selector: &Selector) -> Option<Vec<usize>> {
        let mut ancestors = vec![self];
        let mut path = Vec::new();
        find_path(self, selector, &mut ancestors, &mut path).then_some(path)
    }

    fn at_path(&self, path: &[usize]) -> Option<&Element> {
        path.iter()
            .try_fold(self, |el, &i| el.children.get(i))
    }

    fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        path.iter()
            .try_fold(self, |el, &i| el.children.get_mut(i))
    }
}

/// Depth-first search over `parent`'s descendants. `ancestors` ends with
/// `parent`; `path` accumulates child indices of the first match.
fn find_path<'a>(
    parent: &'a Element,
    selector: &Selector,
    ancestors: &mut Vec<&'a Element>,
    path: &mut Vec<usize>,
) -> bool {
    for (i, child) in parent.children.iter().enumerate() {
        path.push(i);
        if selector.matches(child, ancestors) {
            return true;
        }
        ancestors.push(child);
        let found = find_path(child, selector, ancestors, path);
        ancestors.pop();
        if found {
            return true;
        }
        path.pop();
    }
    false
}

fn collect_matches<'a>(
    parent: &'a Element,
    selector: &Selector,
    ancestors: &mut Vec<&'a Element>,
    out: &mut Vec<&'a Element>,
) {
    for child in &parent.children {
        if selector.matches(child, ancestors) {
            out.push(child);
        }
        ancestors.push(child);
        collect_matches(child, selector, ancestors, out);
        ancestors.pop();
    }
}

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
