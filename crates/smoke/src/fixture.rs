// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Component fixture: owns a live component and its rendered tree.

use crate::clock::FakeClock;
use crate::component::{Component, DomEvent};
use crate::dom::Element;
use crate::injector::{Injector, Providers};

/// Tag of the element every fixture mounts its component into
pub const HOST_TAG: &str = "host";

/// A mounted component.
///
/// The root is a `<host>` element whose single child is the component's
/// last rendered view. Before the first [`detect_changes`](Self::detect_changes)
/// the host is empty.
pub struct ComponentFixture<C: Component> {
    component: C,
    root: Element,
    clock: FakeClock,
    render_count: usize,
    destroyed: bool,
}

impl<C: Component> ComponentFixture<C> {
    /// Instantiate `C`. A [`FakeClock`] is always available to the
    /// component; `providers` may replace it with their own.
    pub fn create(providers: Providers) -> Self {
        let providers = Providers::new().provide(FakeClock::at_epoch()).merge(providers);
        let injector = Injector::new(providers);
        let clock = injector
            .try_get::<FakeClock>()
            .map(|clock| (*clock).clone())
            .unwrap_or_default();
        let component = C::create(&injector);
        tracing::debug!(component = std::any::type_name::<C>(), "fixture created");
        Self {
            component,
            root: Element::new(HOST_TAG),
            clock,
            render_count: 0,
            destroyed: false,
        }
    }

    /// Run one render pass. Ignored after `destroy()`.
    pub fn detect_changes(&mut self) {
        if self.destroyed {
            tracing::debug!("detect_changes on destroyed fixture ignored");
            return;
        }
        self.root = Element::new(HOST_TAG).child(self.component.render());
        self.render_count += 1;
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// The host element
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn clock(&self) -> &FakeClock {
        &self.clock
    }

    /// Number of completed render passes
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Deliver an event to the component. Does not re-render.
    pub fn dispatch(&mut self, event: DomEvent) {
        if self.destroyed {
            return;
        }
        self.component.handle_event(&event);
    }

    /// Advance the clock and let the component observe the new time.
    pub fn advance(&mut self, duration: std::time::Duration) -> u64 {
        let now = self.clock.advance(duration);
        if !self.destroyed {
            self.component.tick(now);
        }
        now
    }

    /// Destroy the component. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.component.destroy();
        self.root = Element::new(HOST_TAG);
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl<C: Component + std::fmt::Debug> std::fmt::Debug for ComponentFixture<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentFixture")
            .field("component", &self.component)
            .field("render_count", &self.render_count)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
