//! WASM adapter exposing sheet parsing to browser pages
//!
//! Pages fetch the published CSV themselves and hand the text to these
//! functions, getting plain JS arrays and objects back.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use sheetfeed::{board_image_url, CsvParser, Inventory, PuzzleCalendar, Table};
use std::cell::Cell;
use wasm_bindgen::prelude::*;

thread_local! {
    static PARSER: Cell<CsvParser> = Cell::new(CsvParser::default());
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Switch delimiter and quote for later `parseCsv` / `parseTable` calls
#[wasm_bindgen(js_name = initParser)]
pub fn init_parser(delimiter: char, quote: char) {
    PARSER.with(|p| p.set(CsvParser::new(delimiter, quote)));
}

/// Array of rows, each an array of strings
#[wasm_bindgen(js_name = parseCsv)]
pub fn parse_csv(text: &str) -> Result<JsValue, JsValue> {
    let rows = PARSER.with(|p| p.get().parse(text));
    to_js(&rows)
}

/// `{ headers, records }` with records keyed by header
#[wasm_bindgen(js_name = parseTable)]
pub fn parse_table(text: &str) -> Result<JsValue, JsValue> {
    let rows = PARSER.with(|p| p.get().parse(text.trim()));
    to_js(&Table::from_rows(rows))
}

/// Object keyed by `YYYY-MM-DD`
#[wasm_bindgen(js_name = parseCalendar)]
pub fn parse_calendar(text: &str) -> Result<JsValue, JsValue> {
    to_js(&PuzzleCalendar::parse(text))
}

/// `{ players, items_by_player }`
#[wasm_bindgen(js_name = parseInventory)]
pub fn parse_inventory(text: &str) -> Result<JsValue, JsValue> {
    to_js(&Inventory::parse(text))
}

/// Board image URL, throws when the sheet has none
#[wasm_bindgen(js_name = boardUrl)]
pub fn board_url(text: &str) -> Result<String, JsValue> {
    board_image_url(text).map_err(|e| JsValue::from_str(&e.to_string()))
}
