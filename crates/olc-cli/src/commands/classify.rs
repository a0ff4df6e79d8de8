use anyhow::Result;
use olc_stage::{copy_for, explain, is_system_no_driver_cancel, OrderSnapshot};
use serde_json::Value;
use tracing::debug;

use super::Record;

/// Classify one snapshot payload into stage + copy.
pub fn classify_record(payload: &Value) -> Record {
    let order = OrderSnapshot::from_value(payload);
    let c = explain(&order);
    let copy = copy_for(c.stage, &order);
    debug!(stage = %c.stage, rule = c.rule.as_str(), "snapshot classified");

    Record::new()
        .field("stage", c.stage.as_str())
        .field("rule", c.rule.as_str())
        .field("title", copy.title)
        .field("subtitle", copy.subtitle)
        .field("terminal", c.stage.is_terminal())
        .field("system_no_driver_cancel", is_system_no_driver_cancel(&order))
}

pub fn run(raw: &str) -> Result<Record> {
    let payload = super::parse_json(raw, "snapshot")?;
    Ok(classify_record(&payload))
}
