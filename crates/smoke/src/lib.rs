// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Smoke-test scaffolding for headless UI components.
//!
//! A [`SmokeContext`] pairs a [`ComponentFixture`] with a
//! [`ConsoleTracker`](shopqa_capture::ConsoleTracker) so that a test only
//! has to say "render this component, poke it, and make sure nothing was
//! logged to the console":
//!
//! ```
//! use shopqa_smoke::{expect_clean_render, Component, Element, Injector, SmokeConfig};
//!
//! struct Banner;
//!
//! impl Component for Banner {
//!     fn create(_: &Injector) -> Self {
//!         Banner
//!     }
//!
//!     fn render(&self) -> Element {
//!         Element::new("h1").class("banner").text("Spring consignment drive")
//!     }
//! }
//!
//! expect_clean_render::<Banner>(SmokeConfig::default()).unwrap();
//! ```
//!
//! Components render into a plain [`Element`] tree that supports a subset
//! of CSS selectors, so DOM assertions run without a browser.

mod clock;
mod component;
mod context;
mod dom;
mod error;
mod fixture;
mod helpers;
mod injector;
mod selector;

pub use clock::FakeClock;
pub use component::{Component, DomEvent, EventKind};
pub use context::{cleanup, create_context, SmokeConfig, SmokeContext};
pub use dom::Element;
pub use error::SmokeFailure;
pub use fixture::ComponentFixture;
pub use helpers::{
    click_element, expect_action_clean, expect_action_clean_async, expect_clean_render,
    expect_render_with_data, require_element, require_element_count, set_input_value,
};
pub use injector::{Injector, Providers};
pub use selector::{Selector, SelectorError};
