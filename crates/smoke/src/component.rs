// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Component contract used by fixtures.

use crate::dom::Element;
use crate::injector::Injector;

/// A UI component that can be mounted in a [`ComponentFixture`](crate::ComponentFixture).
///
/// Only `create` and `render` are required. The fixture calls `render`
/// on every change-detection pass and replaces its root with the result.
pub trait Component: 'static {
    /// Build the component, pulling collaborators from `injector`.
    fn create(injector: &Injector) -> Self
    where
        Self: Sized;

    /// Produce the current view
    fn render(&self) -> Element;

    /// React to a DOM event dispatched by the fixture
    fn handle_event(&mut self, _event: &DomEvent) {}

    /// Called after the fixture clock advances
    fn tick(&mut self, _now_ms: u64) {}

    /// Release resources; called once when the fixture is destroyed
    fn destroy(&mut self) {}
}

/// Kinds of events the fixture can dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    Change,
}

/// An event and a snapshot of the element it targets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: Element,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: Element) -> Self {
        Self { kind, target }
    }

    /// The target's `id` attribute
    pub fn target_id(&self) -> Option<&str> {
        self.target.get_id()
    }

    /// The target's current value (input events)
    pub fn value(&self) -> Option<&str> {
        self.target.get_value()
    }

    /// The target's `data-action` attribute, a convention for routing clicks
    pub fn action(&self) -> Option<&str> {
        self.target.attr_value("data-action")
    }
}
