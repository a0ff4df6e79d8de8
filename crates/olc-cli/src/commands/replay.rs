//! Replay an NDJSON event log through the normalizer.
//!
//! Each line is classified independently; there is no dedup and no
//! reordering. Malformed lines are reported and counted, never fatal.

use olc_events::{inspect, refetch_decision};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::event::signal_record;
use super::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayTotals {
    pub events: usize,
    pub refresh: usize,
    pub ignored: usize,
    pub errors: usize,
}

impl ReplayTotals {
    pub fn record(&self) -> Record {
        Record::new()
            .field("events", self.events)
            .field("refresh", self.refresh)
            .field("ignored", self.ignored)
            .field("errors", self.errors)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions<'a> {
    pub watch: Option<&'a str>,
    pub only_refresh: bool,
}

/// Per-line records (1-based line numbers) plus totals.
///
/// With `watch`, "refresh" counts refetch decisions for that order rather
/// than raw trigger membership.
pub fn replay_lines(raw: &str, opts: ReplayOptions<'_>) -> (Vec<Record>, ReplayTotals) {
    let mut records = Vec::new();
    let mut totals = ReplayTotals::default();

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping malformed event line");
                totals.errors += 1;
                records.push(
                    Record::new()
                        .field("line", line_no)
                        .field("error", e.to_string()),
                );
                continue;
            }
        };

        totals.events += 1;
        let signal = inspect(&event);
        let mut record = Record::new().field("line", line_no);
        let refresh = match opts.watch {
            Some(id) => {
                let decision = refetch_decision(&event, id);
                let refetch = decision.is_refetch();
                record = append(record, signal_record(&signal)).field("decision", decision.to_string());
                refetch
            }
            None => {
                record = append(record, signal_record(&signal));
                signal.refresh
            }
        };

        if refresh {
            totals.refresh += 1;
        } else {
            totals.ignored += 1;
        }
        if refresh || !opts.only_refresh {
            records.push(record);
        }
    }

    (records, totals)
}

fn append(mut head: Record, tail: Record) -> Record {
    for (k, v) in tail.fields {
        head = head.field(k, v);
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = r#"{"type":"order.updated","order_id":"A"}

{"type":"new_message","order_id":"A"}
{broken
{"type":"driver.location","order_id":"B"}
"#;

    fn opts(watch: Option<&str>, only_refresh: bool) -> ReplayOptions<'_> {
        ReplayOptions {
            watch,
            only_refresh,
        }
    }

    #[test]
    fn totals_count_every_non_blank_line() {
        let (records, totals) = replay_lines(LOG, opts(None, false));
        assert_eq!(
            totals,
            ReplayTotals {
                events: 3,
                refresh: 2,
                ignored: 1,
                errors: 1
            }
        );
        assert_eq!(records.len(), 4);
        assert_eq!(records[2].to_json()["line"], 4);
        assert!(records[2].to_json()["error"].is_string());
    }

    #[test]
    fn watch_filters_other_orders() {
        let (_, totals) = replay_lines(LOG, opts(Some("A"), false));
        assert_eq!(totals.refresh, 1);
        assert_eq!(totals.ignored, 2);
    }

    #[test]
    fn only_refresh_drops_ignored_lines_but_keeps_errors() {
        let (records, _) = replay_lines(LOG, opts(None, true));
        let lines: Vec<Value> = records.iter().map(|r| r.to_json()["line"].clone()).collect();
        assert_eq!(lines, vec![Value::from(1), Value::from(4), Value::from(5)]);
    }
}
