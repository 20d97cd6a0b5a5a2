//! WebAssembly module for the Supply Chain Dashboard
//!
//! Lets the browser UI run the same catalog generator and derived views as
//! the CLI. Every export takes and returns JSON strings.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

use shared::navigation::{guard, resolve};
use shared::{Catalog, DashboardStats, GeneratorOptions, Locale, OrderStatus, Role};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("supply chain dashboard wasm ready"));
}

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_role(role: &str) -> Result<Role, JsValue> {
    role.parse().map_err(|e: shared::ParseRoleError| JsValue::from_str(&e.to_string()))
}

fn anchor_from_millis(millis: Option<f64>) -> Result<DateTime<Utc>, JsValue> {
    let millis = millis.unwrap_or_else(js_sys::Date::now);
    DateTime::from_timestamp_millis(millis as i64)
        .ok_or_else(|| JsValue::from_str("Anchor timestamp out of range"))
}

/// Generate the default-sized catalog; the anchor defaults to now
#[wasm_bindgen]
pub fn generate_catalog(seed: u64, anchor_millis: Option<f64>) -> Result<String, JsValue> {
    let anchor = anchor_from_millis(anchor_millis)?;
    to_json(&shared::generate_catalog(
        seed,
        anchor,
        &GeneratorOptions::default(),
    ))
}

#[wasm_bindgen]
pub fn dashboard_stats(catalog_json: &str, role: &str) -> Result<String, JsValue> {
    let catalog: Catalog = parse(catalog_json, "catalog")?;
    to_json(&shared::stats::dashboard_stats(&catalog, parse_role(role)?))
}

/// Summary cards; pass no role for the signed-out pair
#[wasm_bindgen]
pub fn dashboard_cards(stats_json: &str, role: Option<String>) -> Result<String, JsValue> {
    let stats: DashboardStats = parse(stats_json, "stats")?;
    let role = role.as_deref().map(parse_role).transpose()?;
    to_json(&shared::stats::dashboard_cards(role, &stats))
}

#[wasm_bindgen]
pub fn inventory_breakdown(catalog_json: &str) -> Result<String, JsValue> {
    let catalog: Catalog = parse(catalog_json, "catalog")?;
    to_json(&shared::stats::inventory_breakdown(&catalog.products))
}

/// Order table rows, newest first, with dates in the given locale
#[wasm_bindgen]
pub fn formatted_orders(catalog_json: &str, locale: &str) -> Result<String, JsValue> {
    let catalog: Catalog = parse(catalog_json, "catalog")?;
    let locale: Locale = locale.parse().map_err(|e: String| JsValue::from_str(&e))?;
    to_json(&shared::views::formatted_orders(&catalog.orders, locale))
}

#[wasm_bindgen]
pub fn search_products(catalog_json: &str, query: &str) -> Result<String, JsValue> {
    let catalog: Catalog = parse(catalog_json, "catalog")?;
    to_json(&shared::views::search_products(&catalog.products, query))
}

/// Badge label for a stock level
#[wasm_bindgen]
pub fn stock_status(quantity: u32, min_level: u32) -> String {
    shared::views::stock_status(quantity, min_level)
        .label()
        .to_string()
}

/// Badge colour for a stock level: red, yellow or green
#[wasm_bindgen]
pub fn stock_status_tone(quantity: u32, min_level: u32) -> Result<String, JsValue> {
    to_json(&shared::views::stock_status(quantity, min_level).tone())
}

/// Badge colour for an order status such as `"shipped"`
#[wasm_bindgen]
pub fn order_status_tone(status: &str) -> Result<String, JsValue> {
    let status: OrderStatus = serde_json::from_value(serde_json::Value::from(status))
        .map_err(|e| JsValue::from_str(&format!("Invalid order status: {}", e)))?;
    to_json(&shared::views::order_status_tone(status))
}

#[wasm_bindgen]
pub fn nav_items(role: Option<String>) -> Result<String, JsValue> {
    let role = role.as_deref().map(parse_role).transpose()?;
    to_json(&shared::navigation::nav_items(role))
}

/// Render or redirect decision for a path
#[wasm_bindgen]
pub fn resolve_route(path: &str, signed_in: bool) -> Result<String, JsValue> {
    to_json(&guard(resolve(path), signed_in))
}

#[wasm_bindgen]
pub fn avatar_initials(name: &str) -> String {
    shared::navigation::avatar_initials(name)
}
