//! olc-testkit
//!
//! Shared fixtures for scenario tests: realistic snapshot payloads, realtime
//! events in the shapes deployed senders actually use, and a full store-order
//! journey pairing each event with the snapshot a refetch would return.

use olc_stage::{OrderSnapshot, UiStage};
use serde_json::{json, Value};

pub const ORDER_ID: &str = "ORD-1001";
pub const OTHER_ORDER_ID: &str = "ORD-2002";

/// Snapshot from a raw JSON payload.
pub fn snapshot(v: Value) -> OrderSnapshot {
    OrderSnapshot::from_value(&v)
}

/// One step of an order's life: what arrived on the socket, what the
/// refetch returned, and what the screen should show.
#[derive(Debug, Clone)]
pub struct JourneyStep {
    pub event: Value,
    pub snapshot: Value,
    pub expected: UiStage,
}

fn step(event: Value, snapshot: Value, expected: UiStage) -> JourneyStep {
    JourneyStep {
        event,
        snapshot,
        expected,
    }
}

/// Store order paid by card, from placement to completion.
///
/// Events deliberately mix canonical, legacy, dotted and camelCase shapes.
pub fn store_order_journey() -> Vec<JourneyStep> {
    vec![
        step(
            json!({ "type": "order.created", "order_id": ORDER_ID }),
            json!({ "status": "pending", "store_id": 7, "store_status": "new",
                    "payment_method": "card", "payment_status": "pending" }),
            UiStage::WaitingStoreConfirm,
        ),
        step(
            json!({ "type": "store_accepted", "data": { "orderId": ORDER_ID } }),
            json!({ "status": "pending", "store_id": 7, "store_status": "accepted",
                    "payment_method": "card", "payment_status": "pending" }),
            UiStage::WaitingPayment,
        ),
        step(
            json!({ "type": "payment_verified", "data": { "order_id": ORDER_ID } }),
            json!({ "status": "pending", "store_id": 7, "store_status": "accepted",
                    "payment_method": "card", "payment_status": "verified" }),
            UiStage::AssigningRider,
        ),
        step(
            json!({ "event_type": "order_preparing", "order_id": ORDER_ID }),
            json!({ "status": "pending", "store_id": 7, "store_status": "preparing",
                    "payment_method": "card", "payment_status": "verified" }),
            UiStage::Preparing,
        ),
        step(
            json!({ "type": "rider_assigned", "job_id": ORDER_ID }),
            json!({ "status": "accepted", "store_id": 7, "store_status": "ready",
                    "driver_id": "drv-9", "payment_method": "card", "payment_status": "verified" }),
            UiStage::RiderOnTheWay,
        ),
        step(
            json!({ "type": "picked_up", "order_id": ORDER_ID }),
            json!({ "status": "picked_up", "store_id": 7, "driver_id": "drv-9" }),
            UiStage::PickedUp,
        ),
        step(
            json!({ "type": "driver.location", "data": { "deliveryOrderId": ORDER_ID, "lat": 1.0 } }),
            json!({ "status": "in_transit", "store_id": 7, "driver_id": "drv-9", "near_you": true }),
            UiStage::NearYou,
        ),
        step(
            json!({ "type": "delivered", "order_id": ORDER_ID }),
            json!({ "status": "delivered", "store_id": 7, "driver_id": "drv-9" }),
            UiStage::Delivered,
        ),
        step(
            json!({ "type": "order_complete", "order_id": ORDER_ID }),
            json!({ "status": "completed", "store_id": 7, "driver_id": "drv-9" }),
            UiStage::Completed,
        ),
    ]
}

/// Parcel order where dispatch runs dry and the platform cancels.
pub fn parcel_exhaustion_journey() -> Vec<JourneyStep> {
    vec![
        step(
            json!({ "type": "searching_driver", "order_id": ORDER_ID }),
            json!({ "status": "pending", "payment_method": "cash" }),
            UiStage::CheckingDrivers,
        ),
        step(
            json!({ "type": "no_drivers_available", "order_id": ORDER_ID }),
            json!({ "status": "pending", "dispatch_status": "exhausted" }),
            UiStage::NoRiders,
        ),
        step(
            json!({ "type": "job_canceled", "order_id": ORDER_ID }),
            json!({ "status": "canceled", "dispatch_status": "exhausted",
                    "cancelled_by": "system", "cancel_reason": "no_drivers_available" }),
            UiStage::Cancelled,
        ),
    ]
}

/// Events that must never cause a refetch for [`ORDER_ID`].
pub fn noise_events() -> Vec<Value> {
    vec![
        json!({ "type": "new_message", "order_id": ORDER_ID }),
        json!({ "type": "ticket_reply", "data": { "order_id": ORDER_ID } }),
        json!({ "type": "driver_profile_updated", "order_id": ORDER_ID }),
        json!({ "type": "wallet_balance_updated" }),
        json!({ "type": "order_updated", "order_id": OTHER_ORDER_ID }),
        json!({ "type": "" , "order_id": ORDER_ID }),
        json!({ "order_id": ORDER_ID }),
        json!({ "type": "some_future_event", "order_id": ORDER_ID }),
        json!(null),
    ]
}

/// NDJSON event log: the store journey, noise, a blank line and one malformed line.
pub fn event_log_ndjson() -> String {
    let mut lines: Vec<String> = store_order_journey()
        .into_iter()
        .map(|s| s.event.to_string())
        .collect();
    lines.push(String::new());
    lines.push(json!({ "type": "new_message", "order_id": ORDER_ID }).to_string());
    lines.push("{not json".to_string());
    lines.join("\n")
}
