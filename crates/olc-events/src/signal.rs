//! One-call event summaries for the realtime dispatcher.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::catalog::{domain_of, EventDomain};
use crate::normalize::{extract_event_type, extract_order_id};
use crate::triggers::is_trigger_type;

/// Everything a router needs to know about one realtime payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventSignal {
    /// Canonical (or passthrough) type; `""` when the payload has none.
    pub canonical_type: String,
    /// Related order id; `""` when the payload has none.
    pub order_id: String,
    /// `None` for types outside the catalog.
    pub domain: Option<EventDomain>,
    pub refresh: bool,
}

pub fn inspect(event: &Value) -> EventSignal {
    let canonical_type = extract_event_type(event);
    let order_id = extract_order_id(event);
    let domain = domain_of(&canonical_type);
    let refresh = !canonical_type.is_empty() && is_trigger_type(&canonical_type);
    EventSignal {
        canonical_type,
        order_id,
        domain,
        refresh,
    }
}

/// Why an event did not lead to a refetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    MissingType,
    NotRefreshTrigger,
    /// Neither the event nor the watcher names an order.
    NoOrderId,
    OtherOrder,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::MissingType => "missing_type",
            IgnoreReason::NotRefreshTrigger => "not_refresh_trigger",
            IgnoreReason::NoOrderId => "no_order_id",
            IgnoreReason::OtherOrder => "other_order",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RefetchDecision {
    Refetch { order_id: String },
    Ignore { reason: IgnoreReason },
}

impl RefetchDecision {
    pub fn is_refetch(&self) -> bool {
        matches!(self, RefetchDecision::Refetch { .. })
    }
}

impl std::fmt::Display for RefetchDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefetchDecision::Refetch { order_id } => write!(f, "refetch:{order_id}"),
            RefetchDecision::Ignore { reason } => write!(f, "ignore:{}", reason.as_str()),
        }
    }
}

/// Refetch decision for a screen watching `watched_order_id`.
///
/// Events that carry no order id are treated as addressed to the watcher.
/// An empty `watched_order_id` accepts any order, but an id-less event then
/// has nothing to refetch and is ignored.
pub fn refetch_decision(event: &Value, watched_order_id: &str) -> RefetchDecision {
    let signal = inspect(event);
    let watched = watched_order_id.trim();

    let decision = if signal.canonical_type.is_empty() {
        RefetchDecision::Ignore {
            reason: IgnoreReason::MissingType,
        }
    } else if !signal.refresh {
        RefetchDecision::Ignore {
            reason: IgnoreReason::NotRefreshTrigger,
        }
    } else if watched.is_empty() && signal.order_id.is_empty() {
        RefetchDecision::Ignore {
            reason: IgnoreReason::NoOrderId,
        }
    } else if !watched.is_empty() && !signal.order_id.is_empty() && signal.order_id != watched {
        RefetchDecision::Ignore {
            reason: IgnoreReason::OtherOrder,
        }
    } else {
        let order_id = if signal.order_id.is_empty() {
            watched.to_string()
        } else {
            signal.order_id.clone()
        };
        RefetchDecision::Refetch { order_id }
    };

    debug!(
        event_type = %signal.canonical_type,
        order_id = %signal.order_id,
        watched,
        %decision,
        "refetch decision"
    );
    decision
}
