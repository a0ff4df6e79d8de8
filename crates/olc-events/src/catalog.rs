use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Canonical event types
// ---------------------------------------------------------------------------

// Order lifecycle
pub const ORDER_CREATED: &str = "order_created";
pub const ORDER_UPDATED: &str = "order_updated";
pub const ORDER_STATUS_CHANGED: &str = "order_status_changed";
pub const ORDER_ACCEPTED: &str = "order_accepted";
pub const ORDER_CANCELLED: &str = "order_cancelled";
pub const ORDER_COMPLETED: &str = "order_completed";

// Dispatch / matching
pub const DISPATCH_SEARCHING: &str = "dispatch_searching";
pub const DISPATCH_OFFER_SENT: &str = "dispatch_offer_sent";
pub const DISPATCH_DRIVER_ASSIGNED: &str = "dispatch_driver_assigned";
pub const DISPATCH_DRIVER_UNASSIGNED: &str = "dispatch_driver_unassigned";
pub const DISPATCH_EXHAUSTED: &str = "dispatch_exhausted";

// Trip progress
pub const TRIP_DRIVER_ARRIVED: &str = "trip_driver_arrived";
pub const TRIP_PICKED_UP: &str = "trip_picked_up";
pub const TRIP_IN_TRANSIT: &str = "trip_in_transit";
pub const TRIP_NEAR_DROPOFF: &str = "trip_near_dropoff";
pub const TRIP_DELIVERED: &str = "trip_delivered";

// Payments / wallet / escrow
pub const PAYMENT_PENDING: &str = "payment_pending";
pub const PAYMENT_SUCCEEDED: &str = "payment_succeeded";
pub const PAYMENT_FAILED: &str = "payment_failed";
pub const PAYMENT_REFUNDED: &str = "payment_refunded";
pub const WALLET_UPDATED: &str = "wallet_updated";
pub const ESCROW_HELD: &str = "escrow_held";
pub const ESCROW_RELEASED: &str = "escrow_released";

// Store / merchant workflow
pub const STORE_ORDER_RECEIVED: &str = "store_order_received";
pub const STORE_ORDER_ACCEPTED: &str = "store_order_accepted";
pub const STORE_ORDER_REJECTED: &str = "store_order_rejected";
pub const STORE_ORDER_PREPARING: &str = "store_order_preparing";
pub const STORE_ORDER_READY: &str = "store_order_ready";
pub const STORE_QUOTE_READY: &str = "store_quote_ready";

// COD / OTP / parcel COD
pub const COD_COLLECTED: &str = "cod_collected";
pub const COD_REMITTED: &str = "cod_remitted";
pub const OTP_GENERATED: &str = "otp_generated";
pub const OTP_VERIFIED: &str = "otp_verified";
pub const PARCEL_COD_COLLECTED: &str = "parcel_cod_collected";

// Chat / support
pub const CHAT_MESSAGE_CREATED: &str = "chat_message_created";
pub const CHAT_MESSAGE_READ: &str = "chat_message_read";
pub const SUPPORT_TICKET_CREATED: &str = "support_ticket_created";
pub const SUPPORT_TICKET_UPDATED: &str = "support_ticket_updated";

// Driver state
pub const DRIVER_STATUS_CHANGED: &str = "driver_status_changed";
pub const DRIVER_LOCATION_UPDATED: &str = "driver_location_updated";
pub const DRIVER_PROFILE_UPDATED: &str = "driver_profile_updated";
pub const DRIVER_RATING_UPDATED: &str = "driver_rating_updated";

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Functional area a canonical event type belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDomain {
    OrderLifecycle,
    Dispatch,
    TripProgress,
    Payments,
    StoreWorkflow,
    CashOnDelivery,
    Support,
    Driver,
}

impl EventDomain {
    pub const ALL: [EventDomain; 8] = [
        EventDomain::OrderLifecycle,
        EventDomain::Dispatch,
        EventDomain::TripProgress,
        EventDomain::Payments,
        EventDomain::StoreWorkflow,
        EventDomain::CashOnDelivery,
        EventDomain::Support,
        EventDomain::Driver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventDomain::OrderLifecycle => "order_lifecycle",
            EventDomain::Dispatch => "dispatch",
            EventDomain::TripProgress => "trip_progress",
            EventDomain::Payments => "payments",
            EventDomain::StoreWorkflow => "store_workflow",
            EventDomain::CashOnDelivery => "cash_on_delivery",
            EventDomain::Support => "support",
            EventDomain::Driver => "driver",
        }
    }
}

impl std::fmt::Display for EventDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full canonical catalog, grouped by domain in declaration order.
const CATALOG: &[(&str, EventDomain)] = &[
    (ORDER_CREATED, EventDomain::OrderLifecycle),
    (ORDER_UPDATED, EventDomain::OrderLifecycle),
    (ORDER_STATUS_CHANGED, EventDomain::OrderLifecycle),
    (ORDER_ACCEPTED, EventDomain::OrderLifecycle),
    (ORDER_CANCELLED, EventDomain::OrderLifecycle),
    (ORDER_COMPLETED, EventDomain::OrderLifecycle),
    (DISPATCH_SEARCHING, EventDomain::Dispatch),
    (DISPATCH_OFFER_SENT, EventDomain::Dispatch),
    (DISPATCH_DRIVER_ASSIGNED, EventDomain::Dispatch),
    (DISPATCH_DRIVER_UNASSIGNED, EventDomain::Dispatch),
    (DISPATCH_EXHAUSTED, EventDomain::Dispatch),
    (TRIP_DRIVER_ARRIVED, EventDomain::TripProgress),
    (TRIP_PICKED_UP, EventDomain::TripProgress),
    (TRIP_IN_TRANSIT, EventDomain::TripProgress),
    (TRIP_NEAR_DROPOFF, EventDomain::TripProgress),
    (TRIP_DELIVERED, EventDomain::TripProgress),
    (PAYMENT_PENDING, EventDomain::Payments),
    (PAYMENT_SUCCEEDED, EventDomain::Payments),
    (PAYMENT_FAILED, EventDomain::Payments),
    (PAYMENT_REFUNDED, EventDomain::Payments),
    (WALLET_UPDATED, EventDomain::Payments),
    (ESCROW_HELD, EventDomain::Payments),
    (ESCROW_RELEASED, EventDomain::Payments),
    (STORE_ORDER_RECEIVED, EventDomain::StoreWorkflow),
    (STORE_ORDER_ACCEPTED, EventDomain::StoreWorkflow),
    (STORE_ORDER_REJECTED, EventDomain::StoreWorkflow),
    (STORE_ORDER_PREPARING, EventDomain::StoreWorkflow),
    (STORE_ORDER_READY, EventDomain::StoreWorkflow),
    (STORE_QUOTE_READY, EventDomain::StoreWorkflow),
    (COD_COLLECTED, EventDomain::CashOnDelivery),
    (COD_REMITTED, EventDomain::CashOnDelivery),
    (OTP_GENERATED, EventDomain::CashOnDelivery),
    (OTP_VERIFIED, EventDomain::CashOnDelivery),
    (PARCEL_COD_COLLECTED, EventDomain::CashOnDelivery),
    (CHAT_MESSAGE_CREATED, EventDomain::Support),
    (CHAT_MESSAGE_READ, EventDomain::Support),
    (SUPPORT_TICKET_CREATED, EventDomain::Support),
    (SUPPORT_TICKET_UPDATED, EventDomain::Support),
    (DRIVER_STATUS_CHANGED, EventDomain::Driver),
    (DRIVER_LOCATION_UPDATED, EventDomain::Driver),
    (DRIVER_PROFILE_UPDATED, EventDomain::Driver),
    (DRIVER_RATING_UPDATED, EventDomain::Driver),
];

/// Read-only view of the canonical catalog as `(type, domain)` pairs.
pub fn catalog() -> &'static [(&'static str, EventDomain)] {
    CATALOG
}

/// `true` when `ty` is exactly one of the canonical types (no trimming, no aliasing).
pub fn is_canonical(ty: &str) -> bool {
    CATALOG.iter().any(|(t, _)| *t == ty)
}

/// Domain of a canonical type. Unknown / legacy strings have no domain.
pub fn domain_of(ty: &str) -> Option<EventDomain> {
    CATALOG.iter().find(|(t, _)| *t == ty).map(|(_, d)| *d)
}
