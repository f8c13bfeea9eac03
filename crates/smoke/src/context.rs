// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Create/cleanup pairing of a fixture with a console tracker.

use crate::clock::FakeClock;
use crate::component::Component;
use crate::dom::Element;
use crate::fixture::ComponentFixture;
use crate::injector::Providers;
use regex::Regex;
use shopqa_capture::{console, ConsoleLock, ConsoleTracker};
use std::any::Any;
use std::time::Duration;

/// Options for [`create_context`].
#[derive(Clone, Debug)]
pub struct SmokeConfig {
    /// Dependency overrides merged in before the component is created
    pub providers: Providers,
    /// Run the first render pass before returning (default `true`)
    pub detect_changes: bool,
    /// Error patterns registered on the tracker before it starts
    pub ignored_patterns: Vec<Regex>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            providers: Providers::new(),
            detect_changes: true,
            ignored_patterns: Vec::new(),
        }
    }
}

impl SmokeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single provider
    pub fn provide<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.providers = self.providers.provide(value);
        self
    }

    /// Merge a provider set
    pub fn providers(mut self, providers: Providers) -> Self {
        self.providers = self.providers.merge(providers);
        self
    }

    pub fn detect_changes(mut self, enabled: bool) -> Self {
        self.detect_changes = enabled;
        self
    }

    /// Ignore errors matching `pattern`
    pub fn ignore(mut self, pattern: Regex) -> Self {
        self.ignored_patterns.push(pattern);
        self
    }
}

/// A live smoke test: a mounted component plus the tracker watching it.
///
/// Holds the console lock for its whole lifetime. Dropping the context
/// stops the tracker and destroys the fixture, so an early return or a
/// failed assertion never leaves the console wrapped.
pub struct SmokeContext<C: Component> {
    fixture: ComponentFixture<C>,
    tracker: ConsoleTracker,
    released: bool,
    // Dropped last, after the tracker has restored the console.
    _console: ConsoleLock,
}

/// Start tracking, then mount `C` according to `config`.
pub fn create_context<C: Component>(config: SmokeConfig) -> SmokeContext<C> {
    let console = console::exclusive();
    let tracker = ConsoleTracker::new();
    for pattern in config.ignored_patterns {
        tracker.add_ignored_pattern(pattern);
    }
    tracker.start();

    let mut fixture = ComponentFixture::<C>::create(config.providers);
    if config.detect_changes {
        fixture.detect_changes();
    }

    SmokeContext {
        fixture,
        tracker,
        released: false,
        _console: console,
    }
}

/// Stop the tracker and destroy the fixture.
pub fn cleanup<C: Component>(ctx: SmokeContext<C>) {
    ctx.cleanup();
}

impl<C: Component> SmokeContext<C> {
    pub fn fixture(&self) -> &ComponentFixture<C> {
        &self.fixture
    }

    pub fn fixture_mut(&mut self) -> &mut ComponentFixture<C> {
        &mut self.fixture
    }

    pub fn component(&self) -> &C {
        self.fixture.component()
    }

    pub fn component_mut(&mut self) -> &mut C {
        self.fixture.component_mut()
    }

    pub fn tracker(&self) -> &ConsoleTracker {
        &self.tracker
    }

    /// The fixture's host element
    pub fn root(&self) -> &Element {
        self.fixture.root()
    }

    pub fn clock(&self) -> &FakeClock {
        self.fixture.clock()
    }

    /// Run one render pass
    pub fn detect_changes(&mut self) {
        self.fixture.detect_changes();
    }

    /// Advance the fixture clock by `duration` and tick the component.
    /// Does not re-render.
    pub fn advance(&mut self, duration: Duration) -> u64 {
        self.fixture.advance(duration)
    }

    /// Explicit form of drop.
    pub fn cleanup(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.tracker.stop();
        self.fixture.destroy();
    }
}

impl<C: Component> Drop for SmokeContext<C> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
