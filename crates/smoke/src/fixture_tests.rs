// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::component::EventKind;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Counts destroy calls through a shared handle the test keeps.
#[derive(Default)]
struct DestroyCounter(AtomicUsize);

#[derive(Debug)]
struct Countdown {
    remaining: u32,
    clicks: u32,
    last_tick: Option<u64>,
    clock: Option<Arc<FakeClock>>,
    destroyed: Option<Arc<DestroyCounter>>,
}

impl std::fmt::Debug for DestroyCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.load(Ordering::SeqCst))
    }
}

impl Component for Countdown {
    fn create(injector: &Injector) -> Self {
        Self {
            remaining: 3,
            clicks: 0,
            last_tick: None,
            clock: injector.try_get::<FakeClock>(),
            destroyed: injector.try_get::<DestroyCounter>(),
        }
    }

    fn render(&self) -> Element {
        Element::new("div")
            .class("countdown")
            .child(Element::new("span").class("remaining").text(self.remaining.to_string()))
            .child(Element::new("button").attr("data-action", "decrement").text("-"))
    }

    fn handle_event(&mut self, event: &DomEvent) {
        if event.kind == EventKind::Click && event.action() == Some("decrement") {
            self.clicks += 1;
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    fn tick(&mut self, now_ms: u64) {
        self.last_tick = Some(now_ms);
    }

    fn destroy(&mut self) {
        if let Some(counter) = &self.destroyed {
            counter.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn remaining(fixture: &ComponentFixture<Countdown>) -> String {
    fixture
        .root()
        .query_selector(".remaining")
        .unwrap()
        .unwrap()
        .text_content()
}

#[test]
fn test_root_is_empty_host_before_first_render() {
    let fixture = ComponentFixture::<Countdown>::create(Providers::new());
    assert_eq!(fixture.root().tag(), HOST_TAG);
    assert!(fixture.root().child_elements().is_empty());
    assert_eq!(fixture.render_count(), 0);
}

#[test]
fn test_detect_changes_renders_into_host() {
    let mut fixture = ComponentFixture::<Countdown>::create(Providers::new());
    fixture.detect_changes();
    assert_eq!(fixture.render_count(), 1);
    assert_eq!(remaining(&fixture), "3");
}

#[test]
fn test_dispatch_applies_on_next_render() {
    let mut fixture = ComponentFixture::<Countdown>::create(Providers::new());
    fixture.detect_changes();

    let button = fixture.root().query_selector("button").unwrap().unwrap().clone();
    fixture.dispatch(DomEvent::new(EventKind::Click, button));
    assert_eq!(fixture.component().clicks, 1);
    assert_eq!(remaining(&fixture), "3");

    fixture.detect_changes();
    assert_eq!(remaining(&fixture), "2");
}

#[test]
fn test_clock_is_provided_by_default() {
    let mut fixture = ComponentFixture::<Countdown>::create(Providers::new());
    let component_clock = fixture.component().clock.clone().unwrap();

    assert_eq!(fixture.advance(Duration::from_millis(250)), 250);
    assert_eq!(component_clock.now_millis(), 250);
    assert_eq!(fixture.component().last_tick, Some(250));
}

#[test]
fn test_provided_clock_replaces_default() {
    let fixture = ComponentFixture::<Countdown>::create(Providers::new().provide(FakeClock::new(5_000)));
    assert_eq!(fixture.clock().now_millis(), 5_000);
    assert_eq!(fixture.component().clock.as_ref().unwrap().now_millis(), 5_000);
}

#[test]
fn test_destroy_is_idempotent() {
    let counter = Arc::new(DestroyCounter::default());
    let mut fixture =
        ComponentFixture::<Countdown>::create(Providers::new().provide_arc(Arc::clone(&counter)));
    fixture.detect_changes();

    fixture.destroy();
    fixture.destroy();
    assert!(fixture.is_destroyed());
    assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    assert!(fixture.root().child_elements().is_empty());
}

#[test]
fn test_destroyed_fixture_ignores_renders_and_events() {
    let mut fixture = ComponentFixture::<Countdown>::create(Providers::new());
    fixture.detect_changes();
    fixture.destroy();

    fixture.detect_changes();
    fixture.dispatch(DomEvent::new(EventKind::Click, Element::new("button").attr("data-action", "decrement")));
    fixture.advance(Duration::from_secs(1));

    assert_eq!(fixture.render_count(), 1);
    assert_eq!(fixture.component().clicks, 0);
    assert_eq!(fixture.component().last_tick, None);
}
