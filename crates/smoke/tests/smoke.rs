// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end smoke tests against small consignment-shop components.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use shopqa_capture::{console_error, console_warn, ConsoleArg};
use shopqa_smoke::{
    click_element, create_context, expect_clean_render, expect_render_with_data,
    require_element, require_element_count, set_input_value, Component, DomEvent, Element,
    EventKind, FakeClock, Injector, SmokeConfig, SmokeFailure,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    sku: &'static str,
    title: &'static str,
    consignor: &'static str,
}

/// In-memory stand-in for the inventory API.
#[derive(Debug, Default)]
struct InventoryApi {
    items: Mutex<Vec<Item>>,
}

impl InventoryApi {
    fn with_items(items: &[Item]) -> Self {
        Self {
            items: Mutex::new(items.to_vec()),
        }
    }

    fn list(&self, filter: &str) -> Vec<Item> {
        let items = self.items.lock().unwrap();
        items
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&filter.to_lowercase()))
            .cloned()
            .collect()
    }

    fn remove(&self, sku: &str) -> bool {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.sku != sku);
        items.len() != before
    }
}

fn stock() -> Vec<Item> {
    vec![
        Item { sku: "A-100", title: "Oak chair", consignor: "Ruth" },
        Item { sku: "A-101", title: "Brass lamp", consignor: "Omar" },
        Item { sku: "A-102", title: "Oak table", consignor: "Ruth" },
    ]
}

/// Inventory page: a search box, a filtered table, and a debounced
/// "refreshed" banner driven by the fixture clock.
#[derive(Debug)]
struct InventoryPage {
    api: Option<Arc<InventoryApi>>,
    clock: Option<Arc<FakeClock>>,
    filter: String,
    rows: Vec<Item>,
    refreshed_at: Option<u64>,
}

impl InventoryPage {
    fn reload(&mut self) {
        match &self.api {
            Some(api) => self.rows = api.list(&self.filter),
            None => console_warn!("inventory api unavailable"),
        }
    }
}

impl Component for InventoryPage {
    fn create(injector: &Injector) -> Self {
        let mut page = Self {
            api: injector.get::<InventoryApi>(),
            clock: injector.try_get::<FakeClock>(),
            filter: String::new(),
            rows: Vec::new(),
            refreshed_at: None,
        };
        page.reload();
        page
    }

    fn render(&self) -> Element {
        let rows = self.rows.iter().map(|item| {
            Element::new("tr")
                .class("item")
                .attr("data-sku", item.sku)
                .child(Element::new("td").class("title").text(item.title))
                .child(Element::new("td").class("consignor").text(item.consignor))
                .child(
                    Element::new("td").child(
                        Element::new("button")
                            .class("remove")
                            .attr("data-action", "remove")
                            .attr("data-sku", item.sku)
                            .text("Remove"),
                    ),
                )
        });
        Element::new("section")
            .id("inventory")
            .child(Element::new("input").id("search").attr("type", "search").value(&self.filter))
            .child(Element::new("table").child(Element::new("tbody").children(rows)))
            .children(
                self.refreshed_at
                    .map(|at| Element::new("p").class("refreshed").text(at.to_string())),
            )
    }

    fn handle_event(&mut self, event: &DomEvent) {
        match event.kind {
            EventKind::Input if event.target_id() == Some("search") => {
                self.filter = event.value().unwrap_or_default().to_string();
            }
            EventKind::Change if event.target_id() == Some("search") => self.reload(),
            EventKind::Click if event.action() == Some("remove") => {
                let sku = event.target.attr_value("data-sku").unwrap_or_default();
                let removed = self.api.as_ref().is_some_and(|api| api.remove(sku));
                if !removed {
                    console_error!(ConsoleArg::named_error("TypeError", format!("unknown sku {sku}")));
                }
                self.reload();
            }
            _ => {}
        }
    }

    fn tick(&mut self, now_ms: u64) {
        if now_ms >= 1_000 && self.refreshed_at.is_none() {
            self.reload();
            self.refreshed_at = self.clock.as_ref().map(|clock| clock.now_millis());
        }
    }
}

fn with_stock() -> SmokeConfig {
    SmokeConfig::new().provide(InventoryApi::with_items(&stock()))
}

#[test]
fn inventory_page_renders_clean() {
    expect_clean_render::<InventoryPage>(with_stock()).unwrap();
}

#[test]
fn inventory_page_without_api_reports_setup_error() {
    let ctx = create_context::<InventoryPage>(SmokeConfig::default());
    let categorized = ctx.tracker().categorized_errors();
    assert_eq!(
        categorized.setup_errors,
        ["NullInjectorError: No provider for InventoryApi!"]
    );
    assert!(categorized.application_errors.is_empty());
    assert_eq!(ctx.tracker().warnings(), ["inventory api unavailable"]);

    ctx.tracker().expect_no_app_errors().unwrap();
    let err = ctx.tracker().expect_no_errors().unwrap_err();
    let report = err.to_string();
    assert!(report.starts_with("Expected no console errors but found 1"));
    assert!(report.contains("Setup errors"));
}

#[test]
fn search_filters_rows() {
    let mut ctx = create_context::<InventoryPage>(with_stock());
    require_element_count(ctx.root(), "tbody > tr.item", 3).unwrap();

    set_input_value(&mut ctx, "#search", "oak").unwrap();
    let rows = require_element_count(ctx.root(), "tbody > tr.item", 2).unwrap();
    let skus: Vec<_> = rows.iter().filter_map(|row| row.attr_value("data-sku")).collect();
    assert_eq!(skus, ["A-100", "A-102"]);
    ctx.tracker().expect_no_errors().unwrap();
}

#[test]
fn remove_button_updates_table() {
    let api = Arc::new(InventoryApi::with_items(&stock()));
    let config = SmokeConfig::new().providers(shopqa_smoke::Providers::new().provide_arc(Arc::clone(&api)));
    let mut ctx = create_context::<InventoryPage>(config);

    click_element(&mut ctx, "tr[data-sku=A-101] button.remove").unwrap();
    require_element_count(ctx.root(), "tr.item", 2).unwrap();
    assert_eq!(api.list("").len(), 2);
    assert!(ctx.root().query_selector("[data-sku=A-101]").unwrap().is_none());
    ctx.tracker().expect_no_errors().unwrap();
}

#[test]
fn advancing_the_clock_shows_refresh_banner() {
    let mut ctx = create_context::<InventoryPage>(with_stock());
    ctx.advance(Duration::from_millis(400));
    ctx.detect_changes();
    assert!(ctx.root().query_selector(".refreshed").unwrap().is_none());

    ctx.advance(Duration::from_millis(600));
    ctx.detect_changes();
    let banner = require_element(ctx.root(), "#inventory > p.refreshed").unwrap();
    assert_eq!(banner.text_content(), "1000");
}

#[test]
fn missing_element_failure_names_selector() {
    let ctx = create_context::<InventoryPage>(with_stock());
    let err = require_element(ctx.root(), "#checkout").unwrap_err();
    assert!(matches!(err, SmokeFailure::ElementNotFound { ref selector } if selector == "#checkout"));
}

/// Consignor summary that needs its consignor set before it can render.
#[derive(Debug, Default)]
struct ConsignorCard {
    name: Option<String>,
    payout_cents: u64,
}

impl Component for ConsignorCard {
    fn create(_: &Injector) -> Self {
        Self::default()
    }

    fn render(&self) -> Element {
        let Some(name) = &self.name else {
            console_error!(ConsoleArg::named_error(
                "TypeError",
                "Cannot read properties of undefined (reading 'name')",
            ));
            return Element::new("article");
        };
        Element::new("article")
            .class("consignor-card")
            .child(Element::new("h3").text(name))
            .child(Element::new("span").class("payout").text(format!("${:.2}", self.payout_cents as f64 / 100.0)))
    }
}

#[test]
fn consignor_card_needs_data() {
    let err = expect_clean_render::<ConsignorCard>(SmokeConfig::default()).unwrap_err();
    let SmokeFailure::Console(output) = err else {
        panic!("expected console failure");
    };
    assert_eq!(output.errors.application_errors.len(), 1);

    expect_render_with_data::<ConsignorCard, _>(
        |card| {
            card.name = Some("Ruth".to_string());
            card.payout_cents = 4_250;
        },
        SmokeConfig::default(),
    )
    .unwrap();
}
