use serde::Serialize;
use tracing::trace;

use crate::snapshot::OrderSnapshot;
use crate::stage::UiStage;

/// Payment statuses treated as "paid enough" to move past payment gating.
///
/// Display hint only; the backend remains the authority on payment state.
pub const PAID_STATUSES: &[&str] = &[
    "verified",
    "paid",
    "captured",
    "authorized",
    "success",
    "completed",
];

/// Payment methods settled on delivery; these never gate on payment status.
pub const CASH_METHODS: &[&str] = &["cash", "cod", "cash_on_delivery"];

/// `cancelled_by` values that identify an automatic, platform-side cancel.
pub const SYSTEM_ACTORS: &[&str] = &["system", "auto", "platform"];

/// `cancel_reason` codes meaning dispatch ran out of drivers.
pub const NO_DRIVER_REASONS: &[&str] = &[
    "no_drivers_available",
    "no_riders_available",
    "dispatch_exhausted",
    "exhausted",
    "no_riders",
    "no_drivers",
];

/// Precedence rule that produced a stage, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageRule {
    DispatchExhausted,
    Terminal,
    DeliveryLeg,
    QuoteFlow,
    StoreFlow,
    NonStoreFlow,
    Fallback,
}

impl StageRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageRule::DispatchExhausted => "dispatch_exhausted",
            StageRule::Terminal => "terminal",
            StageRule::DeliveryLeg => "delivery_leg",
            StageRule::QuoteFlow => "quote_flow",
            StageRule::StoreFlow => "store_flow",
            StageRule::NonStoreFlow => "non_store_flow",
            StageRule::Fallback => "fallback",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub stage: UiStage,
    pub rule: StageRule,
}

pub fn is_cancelled(order: &OrderSnapshot) -> bool {
    matches!(
        OrderSnapshot::norm(&order.status).as_str(),
        "cancelled" | "canceled"
    )
}

pub fn is_paid_enough(order: &OrderSnapshot) -> bool {
    let status = OrderSnapshot::norm(&order.payment_status);
    PAID_STATUSES.contains(&status.as_str())
}

/// Electronic payment must clear before dispatch. A blank method does not gate.
pub fn requires_payment(order: &OrderSnapshot) -> bool {
    let method = OrderSnapshot::norm(&order.payment_method);
    !method.is_empty() && !CASH_METHODS.contains(&method.as_str())
}

/// Quote flow: explicit flag or any non-blank request kind.
pub fn requires_quote(order: &OrderSnapshot) -> bool {
    order.requires_quote_confirmation || !OrderSnapshot::norm(&order.request_kind).is_empty()
}

/// Cancelled by the platform because no driver could be matched.
///
/// Selects non-penalizing copy only; it never changes the stage.
pub fn is_system_no_driver_cancel(order: &OrderSnapshot) -> bool {
    if !is_cancelled(order) {
        return false;
    }
    let actor = OrderSnapshot::norm(&order.cancelled_by);
    let reason = OrderSnapshot::norm(&order.cancel_reason);
    SYSTEM_ACTORS.contains(&actor.as_str()) && NO_DRIVER_REASONS.contains(&reason.as_str())
}

pub fn classify(order: &OrderSnapshot) -> UiStage {
    explain(order).stage
}

/// Stage plus the rule that matched. Rules are evaluated top to bottom and
/// the first match wins; several raw fields can be true at once.
pub fn explain(order: &OrderSnapshot) -> Classification {
    let (stage, rule) = evaluate(order);
    trace!(stage = stage.as_str(), rule = rule.as_str(), "order stage classified");
    Classification { stage, rule }
}

fn evaluate(order: &OrderSnapshot) -> (UiStage, StageRule) {
    let status = OrderSnapshot::norm(&order.status);
    let cancelled = is_cancelled(order);

    // 1) Exhausted dispatch reads as "no riders" until the backend actually cancels.
    let dispatch = OrderSnapshot::norm(&order.dispatch_status);
    let exhausted = dispatch == "exhausted" || dispatch.contains("exhaust");
    if !order.has_driver() && exhausted && !cancelled {
        return (UiStage::NoRiders, StageRule::DispatchExhausted);
    }

    // 2) Hard terminal states.
    if cancelled {
        return (UiStage::Cancelled, StageRule::Terminal);
    }
    if status == "completed" {
        return (UiStage::Completed, StageRule::Terminal);
    }

    // 3) Delivery leg.
    match status.as_str() {
        "delivered" => return (UiStage::Delivered, StageRule::DeliveryLeg),
        "in_transit" if order.near_you => return (UiStage::NearYou, StageRule::DeliveryLeg),
        "in_transit" | "picked_up" => return (UiStage::PickedUp, StageRule::DeliveryLeg),
        "arrived" | "accepted" => return (UiStage::RiderOnTheWay, StageRule::DeliveryLeg),
        _ => {}
    }

    // 4) Store-attached flow.
    if order.has_store() {
        if requires_quote(order) {
            match OrderSnapshot::norm(&order.quote_status).as_str() {
                "pending" => return (UiStage::WaitingQuote, StageRule::QuoteFlow),
                "ready" if !is_paid_enough(order) => {
                    return (UiStage::QuoteReady, StageRule::QuoteFlow)
                }
                _ => {}
            }
        }

        match OrderSnapshot::norm(&order.store_status).as_str() {
            "" | "new" => return (UiStage::WaitingStoreConfirm, StageRule::StoreFlow),
            "preparing" => return (UiStage::Preparing, StageRule::StoreFlow),
            "ready" | "accepted" => return (payment_gate(order), StageRule::StoreFlow),
            _ => {}
        }
    }

    // 5) Parcel / transport flow.
    match status.as_str() {
        "pending_payment" => return (UiStage::AssigningRider, StageRule::NonStoreFlow),
        "pending" if order.has_driver() => {
            return (UiStage::AssigningRider, StageRule::NonStoreFlow)
        }
        "pending" => return (UiStage::CheckingDrivers, StageRule::NonStoreFlow),
        _ => {}
    }

    // 6) Nothing matched: in progress, nothing alarming.
    (UiStage::AssigningRider, StageRule::Fallback)
}

fn payment_gate(order: &OrderSnapshot) -> UiStage {
    if requires_payment(order) && !is_paid_enough(order) {
        UiStage::WaitingPayment
    } else {
        UiStage::AssigningRider
    }
}
