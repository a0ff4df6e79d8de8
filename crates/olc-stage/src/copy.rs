use serde::Serialize;

use crate::classify::{classify, is_system_no_driver_cancel};
use crate::snapshot::OrderSnapshot;
use crate::stage::UiStage;

/// User-facing title/subtitle pair, rendered verbatim by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StageCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

const fn pair(title: &'static str, subtitle: &'static str) -> StageCopy {
    StageCopy { title, subtitle }
}

const CANCELLED_GENERIC: StageCopy = pair("Booking cancelled", "This booking was cancelled.");

const CANCELLED_NO_DRIVER: StageCopy = pair(
    "Couldn't match a rider",
    "No riders were available, so we cancelled this booking. You have not been charged.",
);

pub fn copy_for(stage: UiStage, order: &OrderSnapshot) -> StageCopy {
    match stage {
        UiStage::CheckingDrivers => pair(
            "Checking for riders",
            "We're looking for available riders near you.",
        ),
        UiStage::NoRiders => pair(
            "No riders available right now",
            "All nearby riders are busy. We'll keep trying, or you can try again shortly.",
        ),
        UiStage::AssigningRider => pair(
            "Assigning a rider",
            "Your order is in progress. We'll let you know when a rider is on the way.",
        ),
        UiStage::WaitingStoreConfirm => pair(
            "Waiting for the store",
            "The store has received your order and will confirm it shortly.",
        ),
        UiStage::WaitingQuote => pair(
            "Waiting for a quote",
            "The store is preparing pricing for your request.",
        ),
        UiStage::QuoteReady => pair(
            "Your quote is ready",
            "Review and confirm the quote to continue.",
        ),
        UiStage::WaitingPayment => pair(
            "Waiting for payment",
            "Complete payment so we can assign a rider.",
        ),
        UiStage::Preparing => pair(
            "Preparing your order",
            "The store is getting your order ready.",
        ),
        UiStage::RiderOnTheWay => pair(
            "Rider on the way",
            "Your rider is heading to pick up your order.",
        ),
        UiStage::PickedUp => pair(
            "Order picked up",
            "Your rider has your order and is on the way.",
        ),
        UiStage::NearYou => pair(
            "Rider is near you",
            "Your rider is almost there. Get ready to receive your order.",
        ),
        UiStage::Delivered => pair("Order delivered", "Your order has been delivered."),
        UiStage::Completed => pair("Order completed", "Thanks for ordering with us."),
        UiStage::Cancelled => {
            if is_system_no_driver_cancel(order) {
                CANCELLED_NO_DRIVER
            } else {
                CANCELLED_GENERIC
            }
        }
    }
}

/// Stage and copy for one snapshot, ready for a presenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub stage: UiStage,
    #[serde(flatten)]
    pub copy: StageCopy,
    pub system_no_driver_cancel: bool,
}

pub fn describe(order: &OrderSnapshot) -> StageView {
    let stage = classify(order);
    StageView {
        stage,
        copy: copy_for(stage, order),
        system_no_driver_cancel: is_system_no_driver_cancel(order),
    }
}
