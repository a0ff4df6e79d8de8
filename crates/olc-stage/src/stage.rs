use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The single lifecycle label shown for an order.
///
/// Closed set; the presentation layer keys icons and copy on [`UiStage::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiStage {
    CheckingDrivers,
    NoRiders,
    AssigningRider,
    WaitingStoreConfirm,
    WaitingQuote,
    QuoteReady,
    WaitingPayment,
    Preparing,
    RiderOnTheWay,
    PickedUp,
    NearYou,
    Delivered,
    Completed,
    Cancelled,
}

impl UiStage {
    pub const ALL: [UiStage; 14] = [
        UiStage::CheckingDrivers,
        UiStage::NoRiders,
        UiStage::AssigningRider,
        UiStage::WaitingStoreConfirm,
        UiStage::WaitingQuote,
        UiStage::QuoteReady,
        UiStage::WaitingPayment,
        UiStage::Preparing,
        UiStage::RiderOnTheWay,
        UiStage::PickedUp,
        UiStage::NearYou,
        UiStage::Delivered,
        UiStage::Completed,
        UiStage::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiStage::CheckingDrivers => "checking_drivers",
            UiStage::NoRiders => "no_riders",
            UiStage::AssigningRider => "assigning_rider",
            UiStage::WaitingStoreConfirm => "waiting_store_confirm",
            UiStage::WaitingQuote => "waiting_quote",
            UiStage::QuoteReady => "quote_ready",
            UiStage::WaitingPayment => "waiting_payment",
            UiStage::Preparing => "preparing",
            UiStage::RiderOnTheWay => "rider_on_the_way",
            UiStage::PickedUp => "picked_up",
            UiStage::NearYou => "near_you",
            UiStage::Delivered => "delivered",
            UiStage::Completed => "completed",
            UiStage::Cancelled => "cancelled",
        }
    }

    /// No further progress is expected once an order reaches this stage.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UiStage::Delivered | UiStage::Completed | UiStage::Cancelled
        )
    }
}

impl std::fmt::Display for UiStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUiStageError {
    pub raw: String,
}

impl std::fmt::Display for ParseUiStageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognised ui stage '{}'", self.raw)
    }
}

impl std::error::Error for ParseUiStageError {}

impl FromStr for UiStage {
    type Err = ParseUiStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        UiStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == wanted)
            .ok_or_else(|| ParseUiStageError { raw: s.to_string() })
    }
}
