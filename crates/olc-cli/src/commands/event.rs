use anyhow::Result;
use olc_events::{inspect, refetch_decision, EventSignal};
use serde_json::Value;

use super::Record;

pub fn signal_record(signal: &EventSignal) -> Record {
    Record::new()
        .field("type", signal.canonical_type.as_str())
        .field("order_id", signal.order_id.as_str())
        .field("domain", signal.domain.map(|d| d.as_str()).unwrap_or(""))
        .field("refresh", signal.refresh)
}

/// Summarize one event; with `watch`, add the refetch decision for that order.
pub fn event_record(event: &Value, watch: Option<&str>) -> Record {
    let record = signal_record(&inspect(event));
    match watch {
        Some(id) => record.field("decision", refetch_decision(event, id).to_string()),
        None => record,
    }
}

pub fn run(raw: &str, watch: Option<&str>) -> Result<Record> {
    let event = super::parse_json(raw, "event")?;
    Ok(event_record(&event, watch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_event_is_summarized() {
        let r = event_record(&json!({ "type": " order.updated ", "data": { "order_id": 42 } }), None)
            .to_json();
        assert_eq!(r["type"], "order_updated");
        assert_eq!(r["order_id"], "42");
        assert_eq!(r["domain"], "order_lifecycle");
        assert_eq!(r["refresh"], true);
        assert!(r.get("decision").is_none());
    }

    #[test]
    fn watch_adds_decision() {
        let r = event_record(&json!({ "type": "new_message", "order_id": "A" }), Some("A")).to_json();
        assert_eq!(r["decision"], "ignore:not_refresh_trigger");
    }
}
