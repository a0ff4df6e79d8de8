//! Legacy alias table.
//!
//! Append-only: deployed senders still emit these spellings, so an existing
//! row must never be pointed at a different canonical type. Targets are
//! always canonical and never themselves aliases (lookup is one hop).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::catalog::*;

const ALIASES: &[(&str, &str)] = &[
    // order lifecycle
    ("order.created", ORDER_CREATED),
    ("order.updated", ORDER_UPDATED),
    ("order.status_changed", ORDER_STATUS_CHANGED),
    ("order.cancelled", ORDER_CANCELLED),
    ("order_canceled", ORDER_CANCELLED),
    ("order_complete", ORDER_COMPLETED),
    ("job_created", ORDER_CREATED),
    ("job_updated", ORDER_UPDATED),
    ("job_status_changed", ORDER_STATUS_CHANGED),
    ("delivery_status_changed", ORDER_STATUS_CHANGED),
    ("job_cancelled", ORDER_CANCELLED),
    ("job_canceled", ORDER_CANCELLED),
    // dispatch
    ("driver_searching", DISPATCH_SEARCHING),
    ("searching_driver", DISPATCH_SEARCHING),
    ("job_offer", DISPATCH_OFFER_SENT),
    ("driver_assigned", DISPATCH_DRIVER_ASSIGNED),
    ("rider_assigned", DISPATCH_DRIVER_ASSIGNED),
    ("job_accepted", DISPATCH_DRIVER_ASSIGNED),
    ("driver_unassigned", DISPATCH_DRIVER_UNASSIGNED),
    ("no_drivers_available", DISPATCH_EXHAUSTED),
    ("no_riders", DISPATCH_EXHAUSTED),
    ("dispatch.exhausted", DISPATCH_EXHAUSTED),
    // trip progress
    ("driver_arrived", TRIP_DRIVER_ARRIVED),
    ("arrived_pickup", TRIP_DRIVER_ARRIVED),
    ("order_picked_up", TRIP_PICKED_UP),
    ("picked_up", TRIP_PICKED_UP),
    ("in_transit", TRIP_IN_TRANSIT),
    ("near_you", TRIP_NEAR_DROPOFF),
    ("order_delivered", TRIP_DELIVERED),
    ("delivered", TRIP_DELIVERED),
    // payments / wallet / escrow
    ("payment_success", PAYMENT_SUCCEEDED),
    ("payment_verified", PAYMENT_SUCCEEDED),
    ("payment.succeeded", PAYMENT_SUCCEEDED),
    ("payment_failure", PAYMENT_FAILED),
    ("refund_processed", PAYMENT_REFUNDED),
    ("wallet_balance_updated", WALLET_UPDATED),
    ("escrow_funded", ESCROW_HELD),
    ("escrow_payout", ESCROW_RELEASED),
    // store workflow
    ("new_store_order", STORE_ORDER_RECEIVED),
    ("store_accepted", STORE_ORDER_ACCEPTED),
    ("store_rejected", STORE_ORDER_REJECTED),
    ("order_preparing", STORE_ORDER_PREPARING),
    ("order_ready", STORE_ORDER_READY),
    ("quote_ready", STORE_QUOTE_READY),
    // cod / otp
    ("cash_collected", COD_COLLECTED),
    ("cod_settled", COD_REMITTED),
    ("otp_sent", OTP_GENERATED),
    ("delivery_otp_verified", OTP_VERIFIED),
    ("parcel_cash_collected", PARCEL_COD_COLLECTED),
    // chat / support
    ("new_message", CHAT_MESSAGE_CREATED),
    ("message_read", CHAT_MESSAGE_READ),
    ("ticket_created", SUPPORT_TICKET_CREATED),
    ("ticket_reply", SUPPORT_TICKET_UPDATED),
    // driver
    ("driver_online_status", DRIVER_STATUS_CHANGED),
    ("driver.location", DRIVER_LOCATION_UPDATED),
    ("location_update", DRIVER_LOCATION_UPDATED),
];

fn index() -> &'static BTreeMap<&'static str, &'static str> {
    static INDEX: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| ALIASES.iter().copied().collect())
}

/// Read-only view of the alias table as `(legacy, canonical)` pairs.
pub fn aliases() -> &'static [(&'static str, &'static str)] {
    ALIASES
}

/// Canonical target of a legacy spelling. Exact match; callers trim first.
pub fn alias_target(legacy: &str) -> Option<&'static str> {
    index().get(legacy).copied()
}
