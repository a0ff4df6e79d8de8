//! olc-stage
//!
//! Order lifecycle stage classification.
//!
//! Architectural decisions:
//! - One snapshot in, exactly one `UiStage` out
//! - Precedence is a linear first-match-wins sequence (see `classify`)
//! - Every text comparison trims + lower-cases first; missing fields read as ""
//! - Copy is a total function over `UiStage`
//!
//! Deterministic, pure logic. No IO. Nothing here returns an error.

mod classify;
mod copy;
mod snapshot;
mod stage;

pub use classify::{
    classify, explain, is_cancelled, is_paid_enough, is_system_no_driver_cancel,
    requires_payment, requires_quote, Classification, StageRule, CASH_METHODS, NO_DRIVER_REASONS,
    PAID_STATUSES, SYSTEM_ACTORS,
};
pub use copy::{copy_for, describe, StageCopy, StageView};
pub use snapshot::OrderSnapshot;
pub use stage::{ParseUiStageError, UiStage};
