// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-call smoke assertions and DOM interaction helpers.

use crate::component::{Component, DomEvent, EventKind};
use crate::context::{create_context, SmokeConfig, SmokeContext};
use crate::dom::Element;
use crate::error::SmokeFailure;
use crate::selector::Selector;
use std::future::Future;

/// Mount `C`, render it, and fail if anything was logged as an error.
pub fn expect_clean_render<C: Component>(config: SmokeConfig) -> Result<(), SmokeFailure> {
    let ctx = create_context::<C>(config);
    ctx.tracker().expect_no_errors()?;
    Ok(())
}

/// Mount `C` without rendering, let `populate` fill in its inputs, then
/// render and fail on any console error.
pub fn expect_render_with_data<C, F>(populate: F, config: SmokeConfig) -> Result<(), SmokeFailure>
where
    C: Component,
    F: FnOnce(&mut C),
{
    let mut ctx = create_context::<C>(config.detect_changes(false));
    populate(ctx.component_mut());
    ctx.detect_changes();
    ctx.tracker().expect_no_errors()?;
    Ok(())
}

/// Run `action` against a live context, render, and fail on any console
/// error captured so far. The context stays alive.
pub fn expect_action_clean<C, F>(ctx: &mut SmokeContext<C>, action: F) -> Result<(), SmokeFailure>
where
    C: Component,
    F: FnOnce(&mut SmokeContext<C>),
{
    action(ctx);
    ctx.detect_changes();
    ctx.tracker().expect_no_errors()?;
    Ok(())
}

/// Async form of [`expect_action_clean`]: awaits `action`, then renders
/// and asserts.
pub async fn expect_action_clean_async<C, Fut>(
    ctx: &mut SmokeContext<C>,
    action: Fut,
) -> Result<(), SmokeFailure>
where
    C: Component,
    Fut: Future<Output = ()>,
{
    action.await;
    ctx.detect_changes();
    ctx.tracker().expect_no_errors()?;
    Ok(())
}

/// First element under `root` matching `selector`, or a failure naming it.
pub fn require_element<'a>(root: &'a Element, selector: &str) -> Result<&'a Element, SmokeFailure> {
    root.query_selector(selector)?
        .ok_or_else(|| SmokeFailure::ElementNotFound {
            selector: selector.to_string(),
        })
}

/// All elements under `root` matching `selector`; fails unless there are
/// exactly `expected` of them.
pub fn require_element_count<'a>(
    root: &'a Element,
    selector: &str,
    expected: usize,
) -> Result<Vec<&'a Element>, SmokeFailure> {
    let found = root.query_selector_all(selector)?;
    if found.len() != expected {
        return Err(SmokeFailure::ElementCount {
            selector: selector.to_string(),
            expected,
            actual: found.len(),
        });
    }
    Ok(found)
}

/// Click the first element matching `selector`, then render.
pub fn click_element<C: Component>(
    ctx: &mut SmokeContext<C>,
    selector: &str,
) -> Result<(), SmokeFailure> {
    let target = require_element(ctx.root(), selector)?.clone();
    ctx.fixture_mut().dispatch(DomEvent::new(EventKind::Click, target));
    ctx.detect_changes();
    Ok(())
}

/// Type `value` into the input matching `selector`: assign it, dispatch
/// `input` then `change`, then render.
pub fn set_input_value<C: Component>(
    ctx: &mut SmokeContext<C>,
    selector: &str,
    value: &str,
) -> Result<(), SmokeFailure> {
    let parsed = Selector::parse(selector)?;
    let target = {
        let element = ctx
            .fixture_mut()
            .root_mut()
            .select_first_mut(&parsed)
            .ok_or_else(|| SmokeFailure::ElementNotFound {
                selector: selector.to_string(),
            })?;
        if !element.is_input() {
            return Err(SmokeFailure::NotAnInput {
                selector: selector.to_string(),
                tag: element.tag().to_string(),
            });
        }
        element.set_value(value);
        element.clone()
    };

    let fixture = ctx.fixture_mut();
    fixture.dispatch(DomEvent::new(EventKind::Input, target.clone()));
    fixture.dispatch(DomEvent::new(EventKind::Change, target));
    ctx.detect_changes();
    Ok(())
}

#[cfg(test)]
#[path = "helpers_tests.rs"]
mod tests;
