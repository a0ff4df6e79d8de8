//! olc-events
//!
//! Realtime event type normalization.
//!
//! Responsibilities:
//! - Resolve raw / legacy event type strings to one canonical type
//! - Pull the related order identifier out of heterogeneous payload shapes
//! - Decide whether a canonical type should cause an order refetch
//!
//! Deterministic, pure logic. No IO. Every entry point is total: malformed
//! input degrades to `""` / `false`, never to an error.

mod aliases;
mod catalog;
mod normalize;
mod raw;
mod signal;
mod triggers;

pub use aliases::{alias_target, aliases};
pub use catalog::*;
pub use normalize::{
    canonical_type, extract_event_type, extract_order_id, is_refresh_trigger, normalize_type,
    EVENT_TYPE_KEYS, ORDER_ID_KEYS,
};
pub use raw::RawText;
pub use signal::{inspect, refetch_decision, EventSignal, IgnoreReason, RefetchDecision};
pub use triggers::{is_trigger_type, refresh_triggers};
