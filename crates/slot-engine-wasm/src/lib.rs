//! WASM bindings for slot-engine.
//!
//! Exposes slot computation to the reserv-ar web front end via
//! `wasm-bindgen`. Booked intervals go in and slots come out as JSON strings,
//! with times as `HH:MM`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use slot_engine::{Interval, TimeOfDay};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Plain-Rust core, shared by the exports and native tests
// ---------------------------------------------------------------------------

fn parse_time(s: &str) -> Result<TimeOfDay, String> {
    s.parse().map_err(|e: slot_engine::SlotError| e.to_string())
}

/// Convert a JSON array of `{start, end}` objects into intervals.
fn parse_booked_json(json: &str) -> Result<Vec<Interval>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid booked JSON: {}", e))
}

fn compute_slots_json(
    opening: &str,
    closing: &str,
    duration_minutes: i32,
    booked_json: &str,
) -> Result<String, String> {
    let opening = parse_time(opening)?;
    let closing = parse_time(closing)?;
    let booked = parse_booked_json(booked_json)?;

    let slots = slot_engine::compute_slots(opening, closing, i64::from(duration_minutes), &booked)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&slots).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the slot grid for one service on one day.
///
/// # Arguments
/// - `opening`, `closing` -- Operating hours as `HH:MM`
/// - `duration_minutes` -- Service duration; must be positive
/// - `booked_json` -- JSON array of `{start, end}` objects with `HH:MM` times
///
/// Returns a JSON string containing an array of `{start, end, available}`
/// objects, or throws with the engine's error message.
#[wasm_bindgen(js_name = "computeSlots")]
pub fn compute_slots(
    opening: &str,
    closing: &str,
    duration_minutes: i32,
    booked_json: &str,
) -> Result<String, JsValue> {
    compute_slots_json(opening, closing, duration_minutes, booked_json)
        .map_err(|e| JsValue::from_str(&e))
}
