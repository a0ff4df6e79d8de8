use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::catalog::*;

/// Canonical types whose receipt means the order snapshot is stale.
///
/// Chat/support traffic, wallet balance pushes and driver profile/rating
/// updates are not listed: they never change what the order screen shows.
const REFRESH_TRIGGERS: &[&str] = &[
    ORDER_CREATED,
    ORDER_UPDATED,
    ORDER_STATUS_CHANGED,
    ORDER_ACCEPTED,
    ORDER_CANCELLED,
    ORDER_COMPLETED,
    DISPATCH_SEARCHING,
    DISPATCH_OFFER_SENT,
    DISPATCH_DRIVER_ASSIGNED,
    DISPATCH_DRIVER_UNASSIGNED,
    DISPATCH_EXHAUSTED,
    TRIP_DRIVER_ARRIVED,
    TRIP_PICKED_UP,
    TRIP_IN_TRANSIT,
    TRIP_NEAR_DROPOFF,
    TRIP_DELIVERED,
    PAYMENT_PENDING,
    PAYMENT_SUCCEEDED,
    PAYMENT_FAILED,
    PAYMENT_REFUNDED,
    ESCROW_HELD,
    ESCROW_RELEASED,
    STORE_ORDER_RECEIVED,
    STORE_ORDER_ACCEPTED,
    STORE_ORDER_REJECTED,
    STORE_ORDER_PREPARING,
    STORE_ORDER_READY,
    STORE_QUOTE_READY,
    COD_COLLECTED,
    COD_REMITTED,
    OTP_GENERATED,
    OTP_VERIFIED,
    PARCEL_COD_COLLECTED,
    DRIVER_STATUS_CHANGED,
    DRIVER_LOCATION_UPDATED,
];

fn index() -> &'static BTreeSet<&'static str> {
    static INDEX: OnceLock<BTreeSet<&'static str>> = OnceLock::new();
    INDEX.get_or_init(|| REFRESH_TRIGGERS.iter().copied().collect())
}

/// Read-only view of the refresh-trigger set.
pub fn refresh_triggers() -> &'static [&'static str] {
    REFRESH_TRIGGERS
}

/// Set membership on an already-canonical type.
pub fn is_trigger_type(canonical: &str) -> bool {
    index().contains(canonical)
}
