//! WASM bindings for the DNS lookup tool.
//!
//! The page performs the DNS-over-HTTPS fetch itself; these bindings
//! validate what goes out and format what comes back.

use quicktools_core::dns::{self, BatchPlan, DnsRecord, RecordType};
use std::str::FromStr;
use wasm_bindgen::prelude::*;

/// Record types the lookup form offers, in display order.
#[wasm_bindgen]
pub fn record_types() -> Vec<String> {
    RecordType::ALL.iter().map(|rt| rt.to_string()).collect()
}

/// Validate a record type string like `"AAAA"` (case-insensitive).
#[wasm_bindgen]
pub fn parse_record_type(input: &str) -> Result<String, JsValue> {
    RecordType::from_str(input)
        .map(|rt| rt.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a textarea of domains, one per line, validated and deduplicated.
#[wasm_bindgen]
pub fn parse_domain_list(text: &str) -> Result<Vec<String>, JsValue> {
    dns::parse_domain_list(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a batch size against the plan (`"free"` or `"pro"`).
#[wasm_bindgen]
pub fn check_batch_quota(plan: &str, domain_count: usize) -> Result<(), JsValue> {
    let plan = match plan {
        "free" => BatchPlan::Free,
        "pro" => BatchPlan::Pro,
        other => return Err(JsValue::from_str(&format!("Unknown plan: {:?}", other))),
    };
    dns::check_batch_quota(plan, domain_count).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format DoH answer records (`[{ name, type, ttl, data }]`) as zone-file
/// style lines, one per record.
#[wasm_bindgen]
pub fn format_records(records: JsValue) -> Result<String, JsValue> {
    let records: Vec<DnsRecord> =
        serde_wasm_bindgen::from_value(records).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(records
        .iter()
        .map(dns::format_record)
        .collect::<Vec<_>>()
        .join("\n"))
}
