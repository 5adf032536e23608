//! WASM bindings for the browser converter page.
//!
//! The page owns the form, clipboard and download buttons. It calls one of
//! these functions with the pasted text and gets Foundry JSON back.

use wasm_bindgen::prelude::*;

use crate::export::{ExportShape, JsonConfig, JsonExporter};
use crate::record::ExportRecord;
use crate::{parse_spells, parse_talents};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert pasted talents to JSON.
///
/// Returns `null` when nothing was found so the page can show its own
/// message; a single talent comes back as a bare object.
#[wasm_bindgen(js_name = parseTalents)]
pub fn parse_talents_json(input: &str) -> Result<Option<String>, JsValue> {
    to_json(&parse_talents(input))
}

/// Convert pasted spells to JSON. Same contract as `parseTalents`.
#[wasm_bindgen(js_name = parseSpells)]
pub fn parse_spells_json(input: &str) -> Result<Option<String>, JsValue> {
    to_json(&parse_spells(input))
}

fn to_json(records: &[ExportRecord]) -> Result<Option<String>, JsValue> {
    if records.is_empty() {
        return Ok(None);
    }
    let exporter = JsonExporter::with_config(JsonConfig {
        shape: ExportShape::Auto,
        pretty: true,
    });
    exporter
        .to_string(records)
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
