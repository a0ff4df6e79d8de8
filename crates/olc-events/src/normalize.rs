use serde_json::Value;
use tracing::trace;

use crate::aliases::alias_target;
use crate::raw::RawText;
use crate::triggers::is_trigger_type;

/// Identifier keys tried in order, first at the top level and then under `data`.
///
/// Some payloads carry several identifier-shaped fields; the first hit wins,
/// so reordering this list changes which order a payload is attributed to.
pub const ORDER_ID_KEYS: &[&str] = &[
    "order_id",
    "job_id",
    "delivery_order_id",
    "id",
    "orderId",
    "jobId",
    "deliveryOrderId",
];

/// Keys that may carry the raw event type, same lookup scheme as [`ORDER_ID_KEYS`].
pub const EVENT_TYPE_KEYS: &[&str] = &["type", "event_type", "eventType", "event"];

/// Trim and de-alias an already-textual event type.
///
/// Empty input stays empty. Unknown types pass through trimmed so newer
/// senders are not rejected by older consumers.
pub fn canonical_type(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match alias_target(trimmed) {
        Some(canonical) => {
            trace!(legacy = trimmed, canonical, "legacy event type aliased");
            canonical.to_string()
        }
        None => trimmed.to_string(),
    }
}

/// Coerce an untyped event type to text, then [`canonical_type`] it.
pub fn normalize_type<T: RawText + ?Sized>(raw: &T) -> String {
    canonical_type(&raw.raw_text())
}

/// `true` only when the normalized type is in the refresh-trigger set.
///
/// Empty and unrecognized types return `false`.
pub fn is_refresh_trigger<T: RawText + ?Sized>(raw: &T) -> bool {
    let canonical = normalize_type(raw);
    !canonical.is_empty() && is_trigger_type(&canonical)
}

/// Related order id, stringified and trimmed, or `""` when the payload has none.
pub fn extract_order_id(event: &Value) -> String {
    first_scalar(event, ORDER_ID_KEYS)
        .or_else(|| event.get("data").and_then(|d| first_scalar(d, ORDER_ID_KEYS)))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Normalized event type read from the payload, or `""` when absent.
///
/// Blank values are skipped so a later key can still supply the type.
pub fn extract_event_type(event: &Value) -> String {
    first_non_blank(event, EVENT_TYPE_KEYS)
        .or_else(|| {
            event
                .get("data")
                .and_then(|d| first_non_blank(d, EVENT_TYPE_KEYS))
        })
        .map(|raw| canonical_type(&raw))
        .unwrap_or_default()
}

fn is_scalar(v: &Value) -> bool {
    matches!(v, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn first_scalar(obj: &Value, keys: &[&str]) -> Option<String> {
    let map = obj.as_object()?;
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find(|v| is_scalar(v))
        .map(RawText::raw_text)
}

fn first_non_blank(obj: &Value, keys: &[&str]) -> Option<String> {
    let map = obj.as_object()?;
    keys.iter()
        .filter_map(|k| map.get(*k))
        .map(RawText::raw_text)
        .find(|s| !s.trim().is_empty())
}
